//! Virtual-memory address-bit and page-table sizing.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use oslab_error::{Result, SimError};
use oslab_types::decimal::{as_integer, ceil_log2, exact_log2, format_decimal, rational_string};
use oslab_types::{MemorySize, MemoryUnit};
use serde::Serialize;

/// Geometry of one virtual-memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmemInput {
    pub virtual_memory_size: MemorySize,
    pub num_physical_frames: u64,
    /// Page and frame size (pages and frames are the same size).
    pub frame_size: MemorySize,
}

/// The regular (per-page) page table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageTable {
    pub size: MemorySize,
    /// One row per virtual page.
    #[serde(with = "rational_string")]
    pub num_rows: BigRational,
    /// Each row stores a frame number.
    pub row_size_bits: u64,
    pub virtual_address_bits: u64,
}

/// The inverted (per-frame) page table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvertedPageTable {
    pub size: MemorySize,
    /// One row per physical frame.
    #[serde(with = "rational_string")]
    pub num_rows: BigRational,
    /// Each row stores a PID plus a page number.
    pub row_size_bits: u64,
    pub min_pid_bits: u64,
    pub min_virtual_address_bits: u64,
}

/// Address-bit breakdown plus both table sizings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VmemOutput {
    #[serde(with = "rational_string")]
    pub num_virtual_pages: BigRational,
    pub page_number_bits: u64,
    pub frame_number_bits: u64,
    pub offset_bits: u64,
    pub physical_address_bits: u64,
    pub page_table: PageTable,
    pub inverted_page_table: InvertedPageTable,
}

/// Derive the address-bit split and both page-table sizings.
///
/// Page-number and frame-number widths are rounded up (`ceil(log2 ...)`);
/// the offset width must be exact, so the frame size has to be a whole
/// power-of-two number of bytes.
pub fn solve_vmem_mapping(input: &VmemInput) -> Result<VmemOutput> {
    if input.num_physical_frames == 0 {
        return Err(SimError::NonPositive {
            what: "number of physical frames",
        });
    }

    let (virtual_amount, frame_amount, _) =
        MemorySize::common_unit(&input.virtual_memory_size, &input.frame_size);
    if !virtual_amount.is_positive() {
        return Err(SimError::NonPositive {
            what: "virtual memory size",
        });
    }
    if !frame_amount.is_positive() {
        return Err(SimError::NonPositive { what: "frame size" });
    }

    let num_virtual_pages = virtual_amount / frame_amount;
    let page_number_bits = ceil_log2(&num_virtual_pages)?;

    let frames = BigRational::from(BigInt::from(input.num_physical_frames));
    let frame_number_bits = ceil_log2(&frames)?;

    let frame_bytes = input.frame_size.convert_to(MemoryUnit::Byte);
    let offset_bits = as_integer(&frame_bytes)
        .filter(|b| !b.is_negative() && !b.is_zero())
        .and_then(|b| exact_log2(&b.to_biguint()?))
        .ok_or_else(|| SimError::FrameSizeNotPowerOfTwo {
            bytes: format_decimal(&frame_bytes),
        })?;

    let physical_address_bits = frame_number_bits + offset_bits;
    let virtual_address_bits = page_number_bits + offset_bits;

    // Regular table: one row per virtual page, each row wide enough for a
    // frame number.
    let page_table_bytes = num_virtual_pages.clone()
        * BigRational::from(BigInt::from(frame_number_bits))
        / BigRational::from(BigInt::from(8));
    let page_table = PageTable {
        size: MemorySize::new(page_table_bytes, MemoryUnit::Byte),
        num_rows: num_virtual_pages.clone(),
        row_size_bits: frame_number_bits,
        virtual_address_bits,
    };

    // Inverted table: one row per frame; a row pairs a PID with a page
    // number, and the PID must at least distinguish the frame owners.
    let min_pid_bits = frame_number_bits;
    let row_size_bits = min_pid_bits + page_number_bits;
    let inverted_bytes = (frames.clone() * BigRational::from(BigInt::from(row_size_bits))
        / BigRational::from(BigInt::from(8)))
    .ceil();
    let inverted_page_table = InvertedPageTable {
        size: MemorySize::new(inverted_bytes, MemoryUnit::Byte),
        num_rows: frames,
        row_size_bits,
        min_pid_bits,
        min_virtual_address_bits: min_pid_bits + page_number_bits + offset_bits,
    };

    Ok(VmemOutput {
        num_virtual_pages,
        page_number_bits,
        frame_number_bits,
        offset_bits,
        physical_address_bits,
        page_table,
        inverted_page_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rational(n: u64) -> BigRational {
        BigRational::from(BigInt::from(n))
    }

    #[test]
    fn four_gigabytes_of_virtual_space() {
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(4, MemoryUnit::Gigabyte),
            num_physical_frames: 1 << 20,
            frame_size: MemorySize::from_integer(4, MemoryUnit::Kilobyte),
        };
        let output = solve_vmem_mapping(&input).unwrap();

        assert_eq!(output.num_virtual_pages, rational(1 << 20));
        assert_eq!(output.page_number_bits, 20);
        assert_eq!(output.frame_number_bits, 20);
        assert_eq!(output.offset_bits, 12);
        assert_eq!(output.physical_address_bits, 32);

        assert_eq!(output.page_table.virtual_address_bits, 32);
        assert_eq!(output.page_table.num_rows, rational(1 << 20));
        assert_eq!(output.page_table.row_size_bits, 20);
        // 2^20 rows x 20 bits / 8 = 2,621,440 bytes.
        assert_eq!(
            output.page_table.size.serialize_to_string(),
            "2621440 B"
        );

        assert_eq!(output.inverted_page_table.num_rows, rational(1 << 20));
        assert_eq!(output.inverted_page_table.row_size_bits, 40);
        assert_eq!(output.inverted_page_table.min_pid_bits, 20);
        assert_eq!(output.inverted_page_table.min_virtual_address_bits, 52);
        assert_eq!(
            output.inverted_page_table.size.serialize_to_string(),
            "5242880 B"
        );
    }

    #[test]
    fn frame_count_bits_round_up() {
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(64, MemoryUnit::Kilobyte),
            num_physical_frames: 1000,
            frame_size: MemorySize::from_integer(4, MemoryUnit::Kilobyte),
        };
        let output = solve_vmem_mapping(&input).unwrap();
        assert_eq!(output.frame_number_bits, 10);
        assert_eq!(output.num_virtual_pages, rational(16));
        assert_eq!(output.page_number_bits, 4);
    }

    #[test]
    fn fractional_page_count_rounds_bits_up() {
        // 5 KB of virtual space over 2 KB frames: 2.5 pages, 2 bits.
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(5, MemoryUnit::Kilobyte),
            num_physical_frames: 4,
            frame_size: MemorySize::from_integer(2, MemoryUnit::Kilobyte),
        };
        let output = solve_vmem_mapping(&input).unwrap();
        assert_eq!(
            output.num_virtual_pages,
            BigRational::new(BigInt::from(5), BigInt::from(2))
        );
        assert_eq!(output.page_number_bits, 2);
    }

    #[test]
    fn non_power_of_two_frame_size_rejected() {
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(1, MemoryUnit::Megabyte),
            num_physical_frames: 16,
            frame_size: MemorySize::from_integer(3000, MemoryUnit::Byte),
        };
        let err = solve_vmem_mapping(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame size must be a power-of-two number of bytes; it is 3000 B"
        );
    }

    #[test]
    fn zero_frames_rejected() {
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(1, MemoryUnit::Megabyte),
            num_physical_frames: 0,
            frame_size: MemorySize::from_integer(4, MemoryUnit::Kilobyte),
        };
        assert!(matches!(
            solve_vmem_mapping(&input),
            Err(SimError::NonPositive { .. })
        ));
    }

    #[test]
    fn huge_address_spaces_stay_exact() {
        // 16 TB of virtual space over 4 KB frames = 2^32 pages; the page
        // table has 2^32 rows of 36 bits.
        let input = VmemInput {
            virtual_memory_size: MemorySize::from_integer(16, MemoryUnit::Terabyte),
            num_physical_frames: 1 << 36,
            frame_size: MemorySize::from_integer(4, MemoryUnit::Kilobyte),
        };
        let output = solve_vmem_mapping(&input).unwrap();
        assert_eq!(output.num_virtual_pages, rational(1 << 32));
        assert_eq!(output.page_number_bits, 32);
        assert_eq!(output.frame_number_bits, 36);
        // 2^32 rows x 36 bits / 8 = 19,327,352,832 bytes, beyond u32 but
        // exact here.
        assert_eq!(
            output.page_table.size.serialize_to_string(),
            "19327352832 B"
        );
    }
}
