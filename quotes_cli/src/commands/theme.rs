use anyhow::Result;
use clap::{Args, ValueEnum};
use quotes_lib::ThemeContext;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark and save the choice
    Toggle,
}

#[derive(Args)]
pub struct ThemeArgs {
    #[arg(value_enum, default_value = "show")]
    pub action: ThemeAction,
}

pub fn run(args: &ThemeArgs, ctx: &mut ThemeContext) -> Result<()> {
    if args.action == ThemeAction::Toggle {
        let mode = ctx.toggle();
        ctx.persist()?;
        tracing::debug!("Saved theme to {}", ctx.path().display());
        println!("Theme switched to {}", mode);
    } else {
        println!("{}", ctx.mode());
    }
    Ok(())
}
