use crate::cli::{
    args::EncodeArgs,
    global::GlobalArgs,
    input::{read_input, write_output},
};
use sextet::Settings;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(args.file.as_ref(), global)?;

    // Command-line flags win over settings files
    let mut options = settings.encoding_options()?;
    if let Some(wrap) = args.wrap {
        options = options.with_line_length(wrap);
    }
    if let Some(terminator) = args.terminator {
        options = options.with_terminator(terminator);
    }

    if !options.wraps() && args.terminator.is_some() && !global.quiet {
        eprintln!("Warning: --terminator has no effect without --wrap");
    }

    let mut encoded = sextet::encode_to_vec(&data, &options);

    // Terminal output ends with a newline; files get the encoded bytes only
    if args.output.is_none() {
        encoded.push(b'\n');
    }
    write_output(args.output.as_deref(), &encoded)
}
