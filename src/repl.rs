use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use crate::meta_commands::{parse_meta_command, MetaCommand, HELP};
use crate::resolver::Resolver;

pub struct REPL<R> {
    input: R,
}

impl REPL<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        REPL {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> REPL<R> {
    pub fn new(input: R) -> Self {
        REPL { input }
    }

    /// Next trimmed line, or `None` once the input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>, io::Error> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer.trim().to_string()))
    }

    /// Resolves addresses typed one per line until `.exit` or end of input.
    pub fn run<
        W: Write,
        const PAGE_SIZE: usize,
        const NUM_PAGES: usize,
        const TLB_SIZE: usize,
        const CACHE_SIZE: usize,
    >(
        &mut self,
        resolver: &mut Resolver<PAGE_SIZE, NUM_PAGES, TLB_SIZE, CACHE_SIZE>,
        output: &mut W,
    ) -> Result<(), io::Error> {
        loop {
            write!(output, "memsim> ")?;
            output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };
            if line.is_empty() {
                continue;
            }
            if line.starts_with('.') {
                match parse_meta_command(&line) {
                    Ok(MetaCommand::Exit) => break,
                    Ok(command) => write_meta_command(command, resolver, output)?,
                    Err(err) => writeln!(output, "{}", err)?,
                }
                continue;
            }
            match parse_address(&line) {
                Ok(address) => match resolver.resolve(address) {
                    Ok(result) => writeln!(output, "{}", result)?,
                    Err(err) => writeln!(output, "Error: {}", err)?,
                },
                Err(err) => writeln!(output, "Cannot parse '{}' as an address: {}", line, err)?,
            }
        }
        Ok(())
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal address.
pub fn parse_address(input: &str) -> Result<i64, ParseIntError> {
    let input = input.trim();
    match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => input.parse::<i64>(),
    }
}

fn write_meta_command<
    W: Write,
    const PAGE_SIZE: usize,
    const NUM_PAGES: usize,
    const TLB_SIZE: usize,
    const CACHE_SIZE: usize,
>(
    command: MetaCommand,
    resolver: &mut Resolver<PAGE_SIZE, NUM_PAGES, TLB_SIZE, CACHE_SIZE>,
    output: &mut W,
) -> Result<(), io::Error> {
    match command {
        MetaCommand::Exit => {}
        MetaCommand::Help => writeln!(output, "{}", HELP)?,
        MetaCommand::Stats => writeln!(output, "{}", resolver.stats())?,
        MetaCommand::Tlb => {
            let tlb = resolver.tlb();
            writeln!(output, "TLB ({}/{}):", tlb.len(), tlb.capacity())?;
            for (page, frame) in tlb.iter() {
                writeln!(output, "  Page {} -> Frame {}", page, frame)?;
            }
        }
        MetaCommand::PageTable => {
            let page_table = resolver.page_table();
            writeln!(output, "Page table ({} pages):", page_table.len())?;
            for entry in page_table.iter() {
                writeln!(
                    output,
                    "  Page {} -> Frame {}",
                    entry.get_page_number(),
                    entry.get_frame_number()
                )?;
            }
        }
        MetaCommand::Cache => {
            let cache = resolver.cache();
            writeln!(output, "Cache ({}/{}):", cache.len(), cache.capacity())?;
            for (frame, data) in cache.iter() {
                writeln!(output, "  Frame {}: {}", frame, data)?;
            }
        }
        MetaCommand::Reset => {
            resolver.reset();
            writeln!(output, "All structures cleared")?;
        }
    }
    Ok(())
}
