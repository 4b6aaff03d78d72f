use screener_core::Field;

use super::{CommandData, CommandResult};

pub fn run() -> CommandResult {
    CommandResult::ok(CommandData::Fields(
        Field::ALL.iter().map(|field| field.as_str()).collect(),
    ))
}
