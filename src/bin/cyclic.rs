use anyhow::Result;
use list_cycle_rs::{build_chain, print_list, TerminalLink};

fn main() -> Result<()> {
    let chain = build_chain([10, 20, 30], TerminalLink::BackToSecondLast)?;

    println!("Calling printList...");
    // Fails with UnboundedTraversal once the walk comes back around to the
    // second node, so the two lines below never run.
    print_list(&chain, &mut std::io::stdout().lock())?;

    println!("List printing complete.");
    drop(chain);
    Ok(())
}
