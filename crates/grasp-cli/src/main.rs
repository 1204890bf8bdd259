mod cli;
mod commands;

use cli::{LangsParams, RulesParams, TokensParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            commands::tree::run(params.into());
        }
        Some(("rules", m)) => {
            let params = RulesParams::from_matches(m);
            commands::rules::run(params.into());
        }
        Some(("langs", m)) => {
            let params = LangsParams::from_matches(m);
            commands::langs::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
