use super::*;

pub const DEFAULT_TOML_PATH: &str = "observer-demo.toml";

/// One value for one option, from either source
struct Setting {
    key: ConfigKey,
    value: toml::Value,
    source: String,
}

fn toml_settings(fs: &dyn FilesystemTrait, path: &str) -> Result<Vec<Setting>, Box<dyn Error>> {
    let table = match fs.read_to_string(path)?.parse::<toml::Value>()? {
        toml::Value::Table(table) => table,
        _ => return Err(format!("toplevel value of {} is not a table", path).into()),
    };
    let mut settings = Vec::with_capacity(table.len());
    for (name, value) in table {
        let key = ConfigKey::from_name(&name)
            .ok_or_else(|| format!("{}: {} is not a valid option", path, name))?;
        settings.push(Setting {
            key,
            value,
            source: format!("{} in {}", name, path),
        });
    }
    Ok(settings)
}

/// Args are --option-name followed by at most one value. The first arg is the program name.
fn arg_settings(args: &[String]) -> Result<Vec<Setting>, Box<dyn Error>> {
    let mut settings = Vec::new();
    let mut rest = args.iter().skip(1).peekable();
    while let Some(arg) = rest.next() {
        let name = arg.trim_start_matches('-');
        if name.len() == arg.len() {
            return Err(format!(
                "command line argument {} is a value not an --option-name",
                arg
            )
            .into());
        }
        let key = ConfigKey::from_name(&name.replace('-', "_"))
            .ok_or_else(|| format!("{} is not a valid command line option", arg))?;
        let value = if rest.peek().map_or(false, |next| !next.starts_with('-')) {
            rest.next().map(|s| s.as_str())
        } else {
            None
        };
        if let Some(extra) = rest.peek().filter(|next| !next.starts_with('-')) {
            return Err(format!(
                "{} has multiple values: {} {}",
                arg,
                value.unwrap_or(""),
                extra
            )
            .into());
        }
        settings.push(Setting {
            key,
            value: key.arg_value(value)?,
            source: format!("{} command line argument", arg),
        });
    }
    Ok(settings)
}

/// Lists every option, shown for --help
pub fn help_text() -> String {
    let mut text = format!(
        "Options can be set in {} or on the command line as --option-name value",
        DEFAULT_TOML_PATH
    );
    for key in ConfigKey::ALL.iter() {
        text.push_str(&format!("\n  {}: {}", key.name(), key.help()));
    }
    text
}

/// Get the configuration from the defaults, the toml file (if it exists) and the command line, in
/// that order. If help was asked for it's printed to the console and happy_exit is set.
pub fn build_config(
    args: &[String],
    fs: &dyn FilesystemTrait,
    console: &dyn ConsoleTrait,
) -> Result<MasterConfig, Box<dyn Error>> {
    let mut settings = Vec::new();
    if fs.is_file(DEFAULT_TOML_PATH) {
        debug!("loading {}", DEFAULT_TOML_PATH);
        settings.extend(toml_settings(fs, DEFAULT_TOML_PATH)?);
    }
    settings.extend(arg_settings(args)?);
    let mut conf = MasterConfig::default();
    for setting in settings {
        let key = setting.key;
        key.apply(&mut conf, setting.value, &setting.source)
            .map_err(|e| format!("{} configuration option: {}", key.name(), e))?;
    }
    if conf.happy_exit {
        console.print_line(&help_text());
    }
    Ok(conf)
}
