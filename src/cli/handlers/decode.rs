use crate::cli::{
    args::DecodeArgs,
    global::GlobalArgs,
    input::{read_input, write_output},
};
use sextet::Settings;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global)?;

    let mut options = settings.decoding_options();
    if args.ignore_garbage {
        options.ignore_unknown_characters = true;
    }

    let text = if options.ignore_unknown_characters {
        &input[..]
    } else {
        strip_trailing_newline(&input)
    };

    let data = sextet::decode(text, &options)?;
    write_output(args.output.as_deref(), &data)
}

/// Drop one trailing `\n` or `\r\n`, as appended by editors and `echo`.
fn strip_trailing_newline(input: &[u8]) -> &[u8] {
    input
        .strip_suffix(b"\r\n")
        .or_else(|| input.strip_suffix(b"\n"))
        .unwrap_or(input)
}
