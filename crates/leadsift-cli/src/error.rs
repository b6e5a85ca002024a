use anyhow::Error;
use leadsift_config::ConfigError;
use leadsift_sheets::SheetError;
use std::io::ErrorKind;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(CliError::InvalidInput(_)) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(sheet_err) = cause.downcast_ref::<SheetError>() {
            return ExitCode::from(sheet_exit_code(sheet_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn sheet_exit_code(err: &SheetError) -> u8 {
    match err {
        SheetError::Io(io_err) if io_err.kind() == ErrorKind::NotFound => EXIT_NOT_FOUND,
        SheetError::UnsupportedFormat(_)
        | SheetError::TooLarge { .. }
        | SheetError::NoWorksheet(_)
        | SheetError::Csv(_)
        | SheetError::Workbook(_) => EXIT_INVALID_INPUT,
        SheetError::Io(_) | SheetError::Archive(_) | SheetError::Json(_) => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidBatchSize(_)
        | ConfigError::InvalidMaxInput(_)
        | ConfigError::InvalidOutputDir(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
