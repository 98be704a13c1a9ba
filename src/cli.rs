use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub baseline: PathBuf,
    pub comparisons: Vec<PathBuf>,
    pub excluded: Vec<String>,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut baseline = None;
        let mut comparisons = Vec::new();
        let mut excluded = Vec::new();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--exclude" => {
                    excluded.push(
                        iter.next()
                            .ok_or_else(|| "--exclude requires a value".to_string())?
                            .to_string(),
                    );
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    if baseline.is_none() {
                        baseline = Some(PathBuf::from(arg));
                    } else {
                        comparisons.push(PathBuf::from(arg));
                    }
                }
            }
        }
        let baseline = baseline.ok_or_else(|| "baseline file required".to_string())?;
        if comparisons.is_empty() {
            return Err("at least one comparison file required".to_string());
        }
        Ok(Self {
            baseline,
            comparisons,
            excluded,
        })
    }

    pub fn help() -> &'static str {
        "Usage: benchplot [--exclude NAME]... BASELINE COMPARISON [COMPARISON...]\n\n\
         Loads pyperf result files, compares every benchmark in BASELINE against\n\
         the same benchmark in each COMPARISON file, and draws a grouped bar chart\n\
         of relative performance with geometric-mean reference lines.\n\n\
         --exclude NAME   skip a baseline benchmark (repeatable)\n"
    }
}
