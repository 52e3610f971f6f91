//! `login`: run the simulated sign-in

use anyhow::Result;
use clap::Parser;
use hrdesk_core::LoginForm;
use tracing::info;

use super::{print_json, Context, RoleArg};
use crate::ui;

#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Role to sign in as; decides the landing screen
    #[arg(long, value_enum, default_value = "admin")]
    pub role: RoleArg,

    #[arg(long)]
    pub remember_me: bool,

    /// Print the session as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let form = LoginForm {
        email: args.email,
        password: args.password,
        role: args.role.into(),
        remember_me: args.remember_me,
    };
    let simulator = ctx.config.login_simulator();
    info!(role = %form.role, delay_ms = simulator.delay().as_millis() as u64, "login");

    let session =
        ui::with_spinner_async("Signing in...", "Signed in", simulator.sign_in(&form)).await?;

    if args.json {
        return print_json(&session);
    }
    println!("Welcome, {} ({})", session.display_name, session.role);
    println!("Landing: {} ({})", session.landing, session.landing.title());
    Ok(())
}
