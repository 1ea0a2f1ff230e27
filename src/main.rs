use std::fs;
use std::io::Write;

use anyhow::{Context, Error};
use minijinja::Environment;

mod cli;
mod config;
mod data;
mod output;

use crate::config::Config;
use crate::output::Output;

fn create_env<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_debug(true);
    minijinja_contrib::add_to_environment(&mut env);
    env
}

fn execute() -> Result<(), Error> {
    let matches = cli::make_command().get_matches();
    let config = Config::from_matches(&matches);

    let template_path = config.template_path();
    let source = fs::read_to_string(template_path)
        .with_context(|| format!("unable to read template file '{}'", template_path.display()))?;
    // The template is registered under its base name so that error
    // messages refer to the file, not the full path.
    let name = template_path
        .file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_else(|| template_path.display().to_string());

    let env = create_env();
    let tmpl = env.template_from_named_str(&name, &source)?;

    let ctx = data::build_context(&config)?;

    let mut output = Output::new(config.output_path())?;
    tmpl.render_to_write(ctx, &mut output)?;
    output.flush()?;
    Ok(())
}

fn print_error(err: &Error) {
    eprintln!("error: {err}");
    if let Some(err) = err.downcast_ref::<minijinja::Error>() {
        if err.name().is_some() {
            eprintln!("{}", err.display_debug_info());
        }
    }
    let mut source_opt = err.source();
    while let Some(source) = source_opt {
        eprintln!();
        eprintln!("caused by: {source}");
        if let Some(source) = source.downcast_ref::<minijinja::Error>() {
            if source.name().is_some() {
                eprintln!("{}", source.display_debug_info());
            }
        }
        source_opt = source.source();
    }
}

fn main() {
    match execute() {
        Ok(()) => {}
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
}
