//! Providers command - list supported invoice layouts.

use telinvoice_core::Provider;

pub fn run() -> anyhow::Result<()> {
    for provider in Provider::ALL {
        println!("{}", provider);
    }
    Ok(())
}
