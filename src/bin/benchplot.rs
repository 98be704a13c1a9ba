use std::{env, process};

use benchplot::{
    BenchPlotError, ChartSpec, CommandLineConfig, ComparisonSet, ResultsSet, render,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    if let Err(err) = run(&config) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(config: &CommandLineConfig) -> Result<(), BenchPlotError> {
    let baseline = ResultsSet::from_file(&config.baseline)?;
    let comparisons = config
        .comparisons
        .iter()
        .map(ResultsSet::from_file)
        .collect::<Result<Vec<_>, _>>()?;
    let set = ComparisonSet::from_results(&baseline, &comparisons, &config.excluded)?;
    let spec = ChartSpec::from_comparisons(&set)?;
    let path = render::display(&spec)?;
    println!("chart written to {}", path.display());
    Ok(())
}
