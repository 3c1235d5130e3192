use anyhow::Result;
use std::io;

// Use library instead of local modules
use book_catalog::Session;

fn main() -> Result<()> {
    println!("📚 Book Catalog v{}\n", book_catalog::VERSION);

    // One catalog, one owner, one run: the session holds the collection
    // for the process lifetime and the input handle until the loop ends.
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout());
    session.run()?;

    println!(
        "\n✅ Session closed with {} book(s) in the catalog",
        session.catalog().count()
    );

    Ok(())
}
