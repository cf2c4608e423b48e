use anyhow::Error;
use factorial::directories::PROJECT_DIRS;
use factorial::factorial::Calculator;
use factorial::repl::{Repl, DEFAULT_PROMPT};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use structopt::clap::AppSettings::{AllArgsOverrideSelf, AllowNegativeNumbers, ColoredHelp};
use structopt::StructOpt;

pub fn config_file() -> PathBuf {
    std::env::var("FACTORIAL_CONFIG_PATH")
        .ok()
        .map(PathBuf::from)
        .filter(|config_path| config_path.is_file())
        .unwrap_or_else(|| PROJECT_DIRS.config_dir().join("config"))
}

/// Split the config file into arguments. Blank lines and `#` comments are skipped.
pub fn parse_config_args(content: &str) -> Result<Vec<OsString>, Error> {
    let args = content
        .split('\n')
        .map(|line| line.trim())
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .map(|line| shell_words::split(line))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(args.iter().flatten().map(OsString::from).collect())
}

pub fn get_args_from_config_file() -> Vec<OsString> {
    let path = config_file();
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return vec![],
        Err(e) => {
            warn!("cannot read config file {}: {}", path.display(), e);
            return vec![];
        }
    };
    parse_config_args(&content).unwrap_or_else(|e| {
        warn!("ignoring config file {}: {}", path.display(), e);
        vec![]
    })
}

/// Put the config file arguments between the program name and the real
/// command line arguments, so the latter win.
pub fn merge_args<I>(file_args: Vec<OsString>, cli_args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cli_args = cli_args.into_iter();
    let mut args = Vec::with_capacity(file_args.len() + 1);
    args.push(cli_args.next().unwrap_or_else(|| "factorial".into()));
    args.extend(file_args);
    args.extend(cli_args);
    args
}

#[derive(StructOpt, Debug)]
#[structopt(name = "factorial")]
#[structopt(global_setting(ColoredHelp))]
#[structopt(global_setting(AllArgsOverrideSelf))]
#[structopt(global_setting(AllowNegativeNumbers))]
pub struct Config {
    /// Show the path of factorial config file
    #[structopt(long)]
    pub config_file: bool,

    /// Print only the number of digits of the result.
    #[structopt(long, short)]
    pub digits: bool,

    /// Refuse to compute n! for any n above this value.
    #[structopt(long, short, value_name = "N")]
    pub limit: Option<u64>,

    /// Text shown before reading the number from stdin.
    #[structopt(long, short, value_name = "TEXT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// The number to use. If not set, it is read from stdin.
    #[structopt(value_name = "N")]
    pub number: Option<String>,
}

impl Config {
    pub fn get_repl(&self) -> Repl {
        Repl::new()
            .prompt(self.prompt.as_str())
            .calculator(Calculator::new().limit(self.limit))
            .digits_only(self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        config_file, get_args_from_config_file, merge_args, parse_config_args, Config,
    };
    use factorial::directories::PROJECT_DIRS;
    use std::ffi::OsString;
    use std::io::Write;
    use structopt::StructOpt;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn config_file_lines() {
        let content = "# defaults\n--limit 1000\n\n  --prompt 'n = '  \n";
        let args = parse_config_args(content).unwrap();
        assert_eq!(
            args,
            vec![
                OsString::from("--limit"),
                OsString::from("1000"),
                OsString::from("--prompt"),
                OsString::from("n = "),
            ]
        );
    }

    #[test]
    fn unbalanced_quote_is_an_error() {
        assert!(parse_config_args("--prompt 'oops").is_err());
    }

    // Every case touching FACTORIAL_CONFIG_PATH lives here, tests run in parallel.
    #[test]
    fn config_file_from_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# defaults\n--digits --limit 30").unwrap();

        std::env::set_var("FACTORIAL_CONFIG_PATH", file.path());
        assert_eq!(config_file(), file.path());
        assert_eq!(
            get_args_from_config_file(),
            os_args(&["--digits", "--limit", "30"])
        );

        let mut not_utf8 = tempfile::NamedTempFile::new().unwrap();
        not_utf8.write_all(b"--limit \xff\n").unwrap();
        std::env::set_var("FACTORIAL_CONFIG_PATH", not_utf8.path());
        assert!(get_args_from_config_file().is_empty());

        let missing = file.path().with_extension("missing");
        std::env::set_var("FACTORIAL_CONFIG_PATH", &missing);
        assert_eq!(config_file(), PROJECT_DIRS.config_dir().join("config"));

        std::env::remove_var("FACTORIAL_CONFIG_PATH");
        assert_eq!(config_file(), PROJECT_DIRS.config_dir().join("config"));
    }

    #[test]
    fn command_line_overrides_config_file() {
        let args = merge_args(
            os_args(&["--limit", "10", "--prompt", "n = "]),
            os_args(&["factorial", "--limit", "20", "7"]),
        );
        assert_eq!(
            args,
            os_args(&[
                "factorial", "--limit", "10", "--prompt", "n = ", "--limit", "20", "7"
            ])
        );

        let config = Config::from_iter(args);
        assert_eq!(config.limit, Some(20));
        assert_eq!(config.prompt, "n = ");
        assert_eq!(config.number.as_deref(), Some("7"));
    }

    #[test]
    fn merge_without_program_name() {
        assert_eq!(
            merge_args(os_args(&["--digits"]), Vec::new()),
            os_args(&["factorial", "--digits"])
        );
    }

    #[test]
    fn defaults() {
        let config = Config::from_iter(&["factorial"]);
        assert_eq!(config.prompt, "Enter a non-negative integer: ");
        assert_eq!(config.limit, None);
        assert!(!config.digits);
        assert!(config.number.is_none());
    }

    #[test]
    fn negative_positional() {
        let config = Config::from_iter(&["factorial", "-3"]);
        assert_eq!(config.number.as_deref(), Some("-3"));
    }
}
