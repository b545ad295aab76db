use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use graphql::queries::Queries;

/// Prints the read API's SDL, or writes it to the path given as the first argument.
fn main() -> std::io::Result<()> {
    let sdl = Schema::build(Queries::default(), EmptyMutation, EmptySubscription)
        .finish()
        .sdl();

    match std::env::args().nth(1) {
        Some(path) => std::fs::write(path, sdl),
        None => {
            print!("{sdl}");
            Ok(())
        }
    }
}
