use std::env;
use std::io::{self, Read};

use card_dp::{parse_input, solve_with, CardSequence, IterativeSolver, Strategy};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("max_cards: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("max_cards: failed to read stdin: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(&options, &input) {
        eprintln!("max_cards: {err}");
        std::process::exit(1);
    }
}

fn run(options: &Options, input: &str) -> Result<(), card_dp::CardError> {
    let cards: CardSequence = parse_input(input)?;
    let best = solve_with(options.strategy, cards.len(), cards.as_slice())?;
    println!("{best}");

    if options.selection {
        let selection = IterativeSolver.select(cards.len(), cards.as_slice())?;
        let indices: Vec<String> = selection.taken.iter().map(|i| i.to_string()).collect();
        println!("{}", indices.join(" "));
    }
    Ok(())
}

struct Options {
    strategy: Strategy,
    selection: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut strategy = Strategy::default();
        let mut selection = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--strategy=") {
                strategy = value.parse()?;
            } else if arg == "--strategy" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --strategy".to_string())?
                    .into();
                strategy = value.parse()?;
            } else if arg == "--selection" {
                selection = true;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        if selection && strategy != Strategy::Iterative {
            return Err("--selection requires the iterative strategy".to_string());
        }

        Ok(Self {
            strategy,
            selection,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: max_cards [<options>] < input

Reads the card count on the first line and the card values on the second,
then prints the maximum number of cards that can be taken.

Options:
  --strategy <naive|memoized|iterative|buggy>   Solver to use (default: iterative)
  --selection                                   Also print the indices of one optimal selection
  -h, --help                                    Print this help message

Example:
  printf '5\\n4 -4 -1 -2 9\\n' | cargo run --bin max_cards
"
        );
    }
}
