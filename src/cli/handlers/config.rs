use crate::cli::{args::ConfigAction, global::GlobalArgs};
use sextet::Settings;

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show { json, toml } => handle_show(json, toml, settings),
    }
}

fn handle_show(
    as_json: bool,
    as_toml: bool,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    // Merged settings, suitable for saving as ~/.config/sextet/config.toml
    if as_toml {
        print!("{}", toml::to_string_pretty(settings)?);
        return Ok(());
    }

    let encoding = settings.encoding_options()?;
    let decoding = settings.decoding_options();

    if as_json {
        let output = serde_json::json!({
            "encode": {
                "line_length": encoding.line_length.columns(),
                "terminator": encoding.effective_terminator().as_str(),
            },
            "decode": {
                "ignore_unknown_characters": decoding.ignore_unknown_characters,
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Encode:");
    match encoding.line_length.columns() {
        0 => println!("  Line length: none"),
        columns => println!("  Line length: {}", columns),
    }
    println!("  Terminator: {}", encoding.effective_terminator().as_str());
    println!("Decode:");
    println!(
        "  Ignore unknown characters: {}",
        if decoding.ignore_unknown_characters {
            "yes"
        } else {
            "no"
        }
    );

    Ok(())
}
