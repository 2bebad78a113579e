//! UFS inode block accounting.
//!
//! An inode carries pointer classes at indirection depths 0 through 3. With
//! `BASE` block addresses fitting in one index block, one pointer at depth
//! `n` reaches `B(n) = BASE^n` blocks on disk, of which
//! `I(n) = Σ_{i=1..n} BASE^(i-1)` are index blocks, leaving
//! `D(n) = B(n) - I(n)` holding file data. Counts grow as `BASE^3`, far
//! past what `f64` can hold exactly, so everything is exact rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use oslab_error::{Result, SimError};
use oslab_types::decimal::rational_string;
use oslab_types::{MemorySize, MemoryUnit};
use serde::Serialize;

/// Pointer counts and geometry of one inode layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UfsInput {
    pub num_direct_pointers: u64,
    pub num_single_indirect_pointers: u64,
    pub num_double_indirect_pointers: u64,
    pub num_triple_indirect_pointers: u64,
    /// Size of one disk block.
    pub block_size: MemorySize,
    /// Bytes needed to store one block number.
    pub block_number_size_bytes: u64,
}

/// Maximum-file accounting for one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UfsOutput {
    /// Data capacity of the largest representable file.
    pub max_file_size: MemorySize,
    /// Blocks holding file data when the file is at maximum size.
    #[serde(with = "rational_string")]
    pub data_blocks_for_max_file: BigRational,
    /// All blocks consumed on disk — data plus index blocks.
    #[serde(with = "rational_string")]
    pub total_blocks_for_max_file: BigRational,
}

/// Compute the maximum representable file size and the block totals.
pub fn calculate_ufs(input: &UfsInput) -> Result<UfsOutput> {
    if input.block_number_size_bytes == 0 {
        return Err(SimError::NonPositive {
            what: "block number size",
        });
    }
    let block_bytes = input.block_size.convert_to(MemoryUnit::Byte);
    if block_bytes <= BigRational::zero() {
        return Err(SimError::NonPositive { what: "block size" });
    }

    let base = block_bytes / BigRational::from(BigInt::from(input.block_number_size_bytes));

    let b = |n: u32| base.pow(n as i32);
    let i = |n: u32| -> BigRational {
        (1..=n).map(|depth| base.pow(depth as i32 - 1)).sum()
    };
    let d = |n: u32| b(n) - i(n);

    let pointer_counts = [
        input.num_direct_pointers,
        input.num_single_indirect_pointers,
        input.num_double_indirect_pointers,
        input.num_triple_indirect_pointers,
    ];

    let weighted = |f: &dyn Fn(u32) -> BigRational| -> BigRational {
        pointer_counts
            .iter()
            .enumerate()
            .map(|(depth, &count)| f(depth as u32) * BigRational::from(BigInt::from(count)))
            .sum()
    };

    let data_blocks_for_max_file = weighted(&d);
    let total_blocks_for_max_file = weighted(&b);

    let max_file_size = MemorySize::new(
        input.block_size.amount.clone() * data_blocks_for_max_file.clone(),
        input.block_size.unit,
    );

    Ok(UfsOutput {
        max_file_size,
        data_blocks_for_max_file,
        total_blocks_for_max_file,
    })
}
