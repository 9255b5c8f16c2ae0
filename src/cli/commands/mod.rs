pub mod account;
pub mod config;
pub mod system;
pub mod tools;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let entries = account::definitions()
        .into_iter()
        .chain(tools::definitions())
        .chain(config::definitions())
        .chain(system::definitions());
    for entry in entries {
        registry.register(entry);
    }
}
