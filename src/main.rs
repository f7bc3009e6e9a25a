//! Aurora demo binary.
//!
//! Wires the app core against the in-memory store and walks through the
//! main flows: sign in, add a folder and a bookmark, search, and print the
//! derived view.

use aurora::app::App;
use aurora::store::MemoryStore;
use aurora::types::bookmark::FolderSelection;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(MemoryStore::new("demo-user"));
    app.login("127.0.0.1", "demo-user", "demo@example.com")?;
    app.sync.refresh().await?;

    let reading = app.add_folder("Reading").await?;
    println!("created folder {}", reading);

    app.open_command_bar();
    app.command_bar.set_title("Spec");
    app.command_bar.set_link("https://x.test");
    app.submit_command_bar().await?;

    app.set_search("spec");
    let view = app.visible();
    println!(
        "search 'spec': {} folder(s), {} bookmark(s)",
        view.visible_folders.len(),
        view.visible_bookmarks.len()
    );
    for bookmark in &view.visible_bookmarks {
        println!(
            "  {} -> {}",
            bookmark.title,
            bookmark.link.as_deref().unwrap_or("(no link)")
        );
    }

    app.select_folder(FolderSelection::All);
    app.delete_folder(&reading).await?;
    println!(
        "after folder delete: {} bookmark(s) remain",
        app.visible().visible_bookmarks.len()
    );

    Ok(())
}
