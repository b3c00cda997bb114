use crate::core::batch::InputFormat;
use crate::core::output::OutputFormat;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for fitness-tracker
#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn fitness-tracker sensor packages into distance, speed and calorie reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Defaults to `demo` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the reports of the built-in sample packages
    Demo {
        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// Compute the report of a single sensor package
    ///
    /// Values are positional:
    ///   RUN  action duration weight
    ///   WLK  action duration weight height
    ///   SWM  action duration weight length_pool count_pool
    ///
    /// Examples:
    ///   fitness-tracker report RUN 15000 1 75
    ///   fitness-tracker report SWM 720 1 80 25 40 --format json
    Report {
        /// Workout code: RUN, WLK or SWM
        code: String,

        /// Sensor values, in the order expected by the workout code
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<f64>,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// Compute the reports of every package stored in a file
    Batch {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(
            long = "input",
            value_enum,
            help = "Input format (default: guessed from the file extension)"
        )]
        input: Option<InputFormat>,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<OutputFormat>,
    },

    /// Show or create the configuration file
    #[command(group(
        ArgGroup::new("config_action")
            .required(true)
            .multiple(true)
            .args(["print_config", "init"])
    ))]
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long,
            short = 'f',
            requires = "init",
            help = "Overwrite an existing configuration file"
        )]
        force: bool,
    },
}
