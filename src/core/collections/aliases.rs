use rustc_hash::{FxBuildHasher, FxHashMap};

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// Optimized `HashMap` type used for row and column storage.
/// Uses `rustc_hash::FxHasher` for faster hashing in non-cryptographic contexts.
///
/// # Performance Characteristics
///
/// - **Hash Function**: `FxHasher` (non-cryptographic, very fast)
/// - **Use Case**: Row maps, inner column maps, and every view handed out by `Map2D`
/// - **Speedup**: ~2-3x faster than `std::collections::HashMap` in typical non-adversarial workloads
///
/// # Security Warning
///
/// ⚠️ **Not DoS-resistant**: Do not use with attacker-controlled keys.
/// Build the container with [`Map2D::with_hasher`](crate::core::map2d::Map2D::with_hasher)
/// and `std::collections::hash_map::RandomState` when keys come from untrusted input.
///
/// # Examples
///
/// ```rust
/// use map2d::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<&str, usize> = FastHashMap::default();
/// map.insert("x", 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Build hasher that instantiates `rustc_hash::FxHasher`.
///
/// This is the default hasher parameter of
/// [`Map2D`](crate::core::map2d::Map2D).
pub type FastBuildHasher = FxBuildHasher;
