use hlas::{Attributes, Config, Error, Precision, PromptId, Slovak, Unit};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: hlas <value> [unit-code] [precision] | hlas --duration <seconds>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config {
        imperial: std::env::var("HLAS_IMPERIAL").is_ok(),
        always_announce_hours: std::env::var("HLAS_ALWAYS_HOURS").is_ok(),
    };
    let sk = Slovak::new(config);

    let prompts = match args.first().map(String::as_str) {
        Some("--duration") => run_duration(&sk, &args[1..]),
        Some(_) => run_number(&sk, &args),
        None => Err(USAGE.to_string()),
    };
    match prompts {
        Ok(prompts) => {
            for prompt in prompts {
                println!("{}", prompt.file_name());
            }
        }
        Err(error) => {
            println!("Error: {error}");
            std::process::exit(1);
        }
    }
}

fn parse<T: std::str::FromStr>(arg: Option<&String>, what: &str) -> Result<T, String> {
    let arg = arg.ok_or_else(|| format!("missing {what}\n{USAGE}"))?;
    arg.parse().map_err(|_| format!("invalid {what}: {arg}"))
}

fn describe(error: Error) -> String {
    error.to_string()
}

fn run_number(sk: &Slovak, args: &[String]) -> Result<Vec<PromptId>, String> {
    let value: i32 = parse(args.first(), "value")?;
    let unit = match args.get(1) {
        Some(_) => Unit::from_code(parse(args.get(1), "unit code")?).map_err(describe)?,
        None => None,
    };
    let precision = match args.get(2) {
        Some(_) => Precision::try_from(parse::<u8>(args.get(2), "precision")?).map_err(describe)?,
        None => Precision::Integer,
    };
    Ok(sk.number_prompts(value, unit, Attributes::with_precision(precision)))
}

fn run_duration(sk: &Slovak, args: &[String]) -> Result<Vec<PromptId>, String> {
    let seconds: i32 = parse(args.first(), "seconds")?;
    Ok(sk.duration_prompts(seconds, Attributes::default()))
}
