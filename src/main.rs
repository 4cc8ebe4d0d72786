use clap::{Arg, Command};
use hackcheck::advisor::CompatibilityAdvisor;
use hackcheck::config::Config;
use hackcheck::evaluator::RuleBasedEvaluator;
use hackcheck::hardware::HardwareSpec;
use hackcheck::render;
use log::LevelFilter;
use std::process;

#[tokio::main]
async fn main() {
    let matches = Command::new("hackcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hackintosh hardware compatibility advisor")
        .long_about(
            "Evaluates a CPU/motherboard/GPU combination for Hackintosh suitability.\n\
             Checks run against a local rule-based evaluator by default; configure a\n\
             remote inference endpoint to delegate analysis, with automatic local\n\
             fallback when the remote service is unavailable.",
        )
        .arg(
            Arg::new("cpu-brand")
                .long("cpu-brand")
                .value_name("BRAND")
                .help("CPU brand, exactly \"Intel\" or \"AMD\""),
        )
        .arg(
            Arg::new("cpu-model")
                .long("cpu-model")
                .value_name("MODEL")
                .help("CPU model, e.g. \"i7-9700K\" or \"Ryzen 5 3600\""),
        )
        .arg(
            Arg::new("motherboard")
                .long("motherboard")
                .value_name("BOARD")
                .help("Motherboard model, e.g. \"Z390 Aorus Pro\""),
        )
        .arg(
            Arg::new("graphics-card")
                .long("graphics-card")
                .value_name("GPU")
                .help("Graphics card, e.g. \"RX 580\""),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("hackcheck.yaml"),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the verdict as JSON instead of the terminal report")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("local")
                .long("local")
                .help("Ignore any configured remote endpoint for this run")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Evaluate a canned set of hardware combinations")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        generate_default_config(generate_path);
        return;
    }

    if matches.get_flag("demo") {
        run_demo();
        return;
    }

    let config_path = matches.get_one::<String>("config").unwrap();
    let config = match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            process::exit(1);
        }
    };

    let field = |name: &str| {
        matches
            .get_one::<String>(name)
            .cloned()
            .unwrap_or_default()
    };
    let spec = HardwareSpec::new(
        field("cpu-brand"),
        field("cpu-model"),
        field("motherboard"),
        field("graphics-card"),
    );

    let advisor = if matches.get_flag("local") {
        CompatibilityAdvisor::local_only()
    } else {
        CompatibilityAdvisor::new(&config)
    };

    match advisor.check(&spec).await {
        Ok(verdict) => {
            if matches.get_flag("json") {
                match render::verdict_json(&verdict) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error rendering verdict: {e}");
                        process::exit(1);
                    }
                }
            } else {
                render::print_verdict(&verdict);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Please fill in all fields to check compatibility.");
            process::exit(1);
        }
    }
}

fn generate_default_config(path: &str) {
    match Config::default().to_file(path) {
        Ok(()) => {
            println!("Default configuration written to: {path}");
            println!("Add a remote section to delegate checks to an inference service:");
            println!();
            println!("remote:");
            println!("  endpoint: http://localhost:3000/api/compatibility");
            println!("  timeout_seconds: 10");
        }
        Err(e) => {
            eprintln!("Error generating configuration: {e}");
            process::exit(1);
        }
    }
}

fn run_demo() {
    let builds = [
        (
            "Modern Intel build",
            HardwareSpec::new("Intel", "i9-12900K", "Z690 Aorus Elite", "RX 6800 XT"),
        ),
        (
            "Ryzen build",
            HardwareSpec::new("AMD", "Ryzen 7 5800X", "X570 Taichi", "RX 580"),
        ),
        (
            "Modern NVIDIA build",
            HardwareSpec::new("Intel", "i7-10700K", "Z490 Vision G", "NVIDIA RTX 3080"),
        ),
        (
            "Pre-Ryzen AMD build",
            HardwareSpec::new("AMD", "FX-8350", "970 Gaming", "NVIDIA GTX 760"),
        ),
    ];

    let evaluator = RuleBasedEvaluator::new();
    for (label, spec) in &builds {
        println!("=== {label} ===");
        println!("{}", spec.description());
        println!();
        render::print_verdict(&evaluator.evaluate(spec));
        println!();
    }
}
