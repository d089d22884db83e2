//! Validating a sign-up form with shared rule templates.
//!
//! Run with `RUST_LOG=ruleline_validator=trace cargo run --example form_fields`
//! to see every evaluated step.

use ruleline_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Templates: declared once, cloned per submitted value.
    let username = Validator::new().trim().required().is_alphanumeric().length_range(3, 16);
    let password = Validator::new().required().strong_password();
    let age = Validator::new().required().is_number().min_int(13).max_int(130);
    let newsletter = Validator::new().default_value("false");

    let submissions = [
        [("username", " alice "), ("password", "Secr3t!pass"), ("age", "34"), ("newsletter", "true")],
        [("username", ""), ("password", "weak"), ("age", "9"), ("newsletter", "")],
    ];

    for fields in submissions {
        let batch = Batch::new()
            .with(username.clone().verifi(fields[0].1, fields[0].0))
            .with(password.clone().verifi(fields[1].1, fields[1].0))
            .with(age.clone().verifi(fields[2].1, fields[2].0));

        match batch.check_all() {
            Ok(()) => println!("✓ form accepted"),
            Err(errors) => print!("✗ {errors}"),
        }

        let subscribe = newsletter.clone().verifi(fields[3].1, fields[3].0);
        match subscribe.bool() {
            Ok(flag) => println!("  newsletter: {flag}"),
            Err(e) => println!("  newsletter: {e}"),
        }
    }
}
