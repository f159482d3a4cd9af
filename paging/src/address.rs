use thiserror::Error;

pub type PageNumber = u32;
pub type Offset = u32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("virtual address {address} is outside of the address space (0..{limit})")]
    InvalidAddress { address: i64, limit: usize },
}

/// Size of the virtual address space in bytes.
pub const fn address_space_size<const PAGE_SIZE: usize, const NUM_PAGES: usize>() -> usize {
    PAGE_SIZE * NUM_PAGES
}

/// Splits a virtual address into its page number and the offset inside that page.
pub fn decompose<const PAGE_SIZE: usize, const NUM_PAGES: usize>(
    virtual_address: i64,
) -> Result<(PageNumber, Offset), AddressError> {
    let limit = address_space_size::<PAGE_SIZE, NUM_PAGES>();
    if virtual_address < 0 || virtual_address as u64 >= limit as u64 {
        return Err(AddressError::InvalidAddress {
            address: virtual_address,
            limit,
        });
    }
    let address = virtual_address as usize;
    let page_number = address / PAGE_SIZE;
    let offset = address % PAGE_SIZE;
    Ok((page_number as PageNumber, offset as Offset))
}
