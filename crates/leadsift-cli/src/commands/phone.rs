use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use leadsift_core::domain::{normalize_phone_cell, RejectionReason};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CheckPhoneArgs {
    /// Raw phone cells; several numbers per value may be separated by , / | & or newlines
    #[arg(required = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PhoneCheckDto {
    input: String,
    valid: bool,
    canonical: Option<String>,
    reason: Option<RejectionReason>,
}

pub fn check_phone(json: bool, args: CheckPhoneArgs) -> Result<()> {
    let checks: Vec<PhoneCheckDto> = args
        .values
        .into_iter()
        .map(|input| match normalize_phone_cell(&input) {
            Ok(phone) => PhoneCheckDto {
                input,
                valid: true,
                canonical: Some(phone.into_string()),
                reason: None,
            },
            Err(rejection) => PhoneCheckDto {
                input,
                valid: false,
                canonical: None,
                reason: Some(rejection.reason),
            },
        })
        .collect();

    if json {
        return print_json(&checks);
    }

    for check in checks {
        match (check.canonical, check.reason) {
            (Some(canonical), _) => println!("{} -> {}", check.input, canonical),
            (None, Some(reason)) => println!("{} -> rejected: {}", check.input, reason),
            (None, None) => println!("{} -> rejected", check.input),
        }
    }
    Ok(())
}
