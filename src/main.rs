use clap::{Parser, Subcommand};
use cubecoords::coords::CubeCoords;
use cubecoords::error::Error;
use cubecoords::facelet::{facelet_to_tuple, tuple_to_facelet, FaceletPerm};
use cubecoords::moves::{apply_moves, parse_moves};
use cubecoords::reid::{reid_to_tuple, tuple_to_reid};
use cubecoords::sticker::{stickers_to_tuple, tuple_to_stickers, Stickers};
use cubecoords::wire::{from_bytes11, to_bytes11};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "shows a cube state in one or more views")]
    Show {
        input: String,

        #[arg(short = 'b', long)]
        bytes: bool,

        #[arg(short = 'c', long)]
        components: bool,

        #[arg(short = 'h', long)]
        heykube: bool,

        #[arg(short = 's', long)]
        stickers: bool,

        #[arg(short = 'R', long)]
        reid: bool,

        #[arg(short, long)]
        verbose: bool,
    },

    #[command(about = "applies a move string to a cube state")]
    Apply {
        moves: String,

        #[arg(long = "on")]
        on: String,

        #[arg(short = 'b', long)]
        bytes: bool,

        #[arg(short = 'c', long)]
        components: bool,

        #[arg(short = 'h', long)]
        heykube: bool,

        #[arg(short = 's', long)]
        stickers: bool,

        #[arg(short = 'R', long)]
        reid: bool,

        #[arg(short, long)]
        verbose: bool,
    },
}

/// Auto-detects an input's shape by its whitespace-token count and decodes
/// it into a coordinate tuple.
fn parse_input(input: &str) -> Result<CubeCoords, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    match tokens.len() {
        4 => {
            let mut v = [0u32; 4];
            for (slot, tok) in v.iter_mut().zip(tokens.iter()) {
                *slot = tok
                    .parse()
                    .map_err(|_| format!("'{tok}' is not a valid component ordinal"))?;
            }
            let cc = CubeCoords {
                cp_lex: v[0],
                co_mask: v[1],
                ep_lex: v[2],
                eo_mask: v[3],
                po_idx_u: 7,
                po_idx_l: 0,
                mo_support: 0,
                mo_mask: 0,
            };
            // round-trip through the wire codec as a range self-check
            let bytes = to_bytes11(&cc);
            from_bytes11(&bytes).map_err(describe)
        }
        11 => {
            let mut bytes = [0u8; 11];
            for (slot, tok) in bytes.iter_mut().zip(tokens.iter()) {
                *slot = u8::from_str_radix(tok, 16)
                    .map_err(|_| format!("'{tok}' is not a valid hex byte"))?;
            }
            from_bytes11(&bytes).map_err(describe)
        }
        20 => {
            let reid = tokens.join(" ");
            reid_to_tuple(&reid).map_err(describe)
        }
        54 => {
            let mut v = [0u8; 54];
            for (slot, tok) in v.iter_mut().zip(tokens.iter()) {
                *slot = tok
                    .parse()
                    .map_err(|_| format!("'{tok}' is not a valid facelet value"))?;
            }
            let max = v.iter().copied().max().unwrap_or(0);
            if max <= 5 {
                stickers_to_tuple(&Stickers(v)).map_err(describe)
            } else {
                facelet_to_tuple(&FaceletPerm(v)).map_err(describe)
            }
        }
        n => Err(format!(
            "input has {n} whitespace-separated tokens; expected 4, 11, 20, or 54"
        )),
    }
}

fn describe(e: Error) -> String {
    match e.code() {
        Some(code) => format!("{e} (code {code})"),
        None => format!("{e}"),
    }
}

fn print_view(cc: &CubeCoords, verbose: bool, label: &str, value: String) {
    if verbose {
        println!("{label}: {value}");
    } else {
        println!("{value}");
    }
    let _ = cc;
}

fn show_views(
    cc: &CubeCoords,
    bytes: bool,
    components: bool,
    heykube: bool,
    stickers: bool,
    reid: bool,
    verbose: bool,
) {
    let any = bytes || components || heykube || stickers || reid;
    if components || !any {
        print_view(cc, verbose, "components", cc.to_string());
    }
    if bytes {
        let hex: Vec<String> = to_bytes11(cc).iter().map(|b| format!("{b:02x}")).collect();
        print_view(cc, verbose, "bytes", hex.join(" "));
    }
    if heykube {
        let perm = tuple_to_facelet(cc);
        let s: Vec<String> = perm.0.iter().map(|v| v.to_string()).collect();
        print_view(cc, verbose, "heykube", s.join(" "));
    }
    if stickers {
        let s = tuple_to_stickers(cc);
        let out: Vec<String> = s.0.iter().map(|v| v.to_string()).collect();
        print_view(cc, verbose, "stickers", out.join(" "));
    }
    if reid {
        print_view(cc, verbose, "reid", tuple_to_reid(cc));
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Show {
            input,
            bytes,
            components,
            heykube,
            stickers,
            reid,
            verbose,
        }) => {
            let cc = parse_input(&input)?;
            show_views(&cc, bytes, components, heykube, stickers, reid, verbose);
            Ok(())
        }
        Some(Commands::Apply {
            moves,
            on,
            bytes,
            components,
            heykube,
            stickers,
            reid,
            verbose,
        }) => {
            let cc = parse_input(&on)?;
            let parsed = parse_moves(&moves).map_err(describe)?;
            let perm = tuple_to_facelet(&cc);
            let moved = apply_moves(&perm, &parsed);
            let result = facelet_to_tuple(&moved).map_err(describe)?;
            show_views(&result, bytes, components, heykube, stickers, reid, verbose);
            Ok(())
        }
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(0),
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(10)
        }
    }
}
