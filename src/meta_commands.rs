use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
    Help,
    Stats,
    Tlb,
    Cache,
    PageTable,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetaCommandError {
    #[error("Unrecognized command '{0}'")]
    UnrecognizedCommand(String),
}

pub const HELP: &str = "\
<address>   resolve a virtual address (decimal or 0x-prefixed hex)
.tlb        show the TLB, oldest entry first
.pt         show the page table in fault order
.cache      show the data cache, oldest frame first
.stats      show hit and miss counters
.reset      start over with empty structures
.help       show this message
.exit       quit";

pub fn parse_meta_command(input: &str) -> Result<MetaCommand, MetaCommandError> {
    match input.trim() {
        ".exit" => Ok(MetaCommand::Exit),
        ".help" => Ok(MetaCommand::Help),
        ".stats" => Ok(MetaCommand::Stats),
        ".tlb" => Ok(MetaCommand::Tlb),
        ".cache" => Ok(MetaCommand::Cache),
        ".pt" => Ok(MetaCommand::PageTable),
        ".reset" => Ok(MetaCommand::Reset),
        other => Err(MetaCommandError::UnrecognizedCommand(other.to_owned())),
    }
}
