//! Enumeration codecs and their registries (DPT 20.xxx, 23.xxx)
//!
//! An enumeration DPT carries a single ordinal. The meaning of each ordinal
//! lives in an [`EnumRegistry`], a validated read-only view over a slice of
//! [`EnumEntry`] values. Registries are normally `const` tables checked at
//! compile time:
//!
//! ```rust
//! use knx_dpt::dpt::{DataPointType, EnumDpt, EnumEntry, EnumRegistry};
//!
//! const FAN_ENTRIES: &[EnumEntry] = &[
//!     EnumEntry::new(0, "Off", "fan off"),
//!     EnumEntry::new(1, "Low", "low speed"),
//!     EnumEntry::new(2, "High", "high speed"),
//! ];
//! const FAN: EnumDpt<'static> = EnumDpt::new("20.999", "Fan speed", EnumRegistry::new(FAN_ENTRIES));
//!
//! let value = FAN.parse(&[0x02])?;
//! assert_eq!(value.name(), "High");
//! assert_eq!(FAN.parse_syntax(&["low", "speed"])?.ordinal(), 1);
//! # Ok::<(), knx_dpt::KnxError>(())
//! ```
//!
//! Tables assembled at run time go through [`EnumRegistry::try_new`] or an
//! [`EnumRegistryBuilder`]. With the `sync` feature, `SharedEnumRegistry`
//! accepts late registrations from several contexts behind a critical section.
//!
//! ## Textual Form
//!
//! Text is resolved in this order: numeric ordinal, exact programmatic name,
//! exact description (tokens joined with single spaces).

use core::fmt;

use crate::dpt::syntax::{join_tokens, parse_u8};
use crate::dpt::{payload, single_byte, DataPointType, DataPointValue, Payload, MAX_PAYLOAD_LEN};
use crate::error::{KnxError, Result};

const BYTE_MASK: u8 = 0xFF;
const TWO_BIT_MASK: u8 = 0x03;

/// One member of an enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnumEntry {
    ordinal: u8,
    name: &'static str,
    description: &'static str,
}

impl EnumEntry {
    /// Create an entry
    pub const fn new(ordinal: u8, name: &'static str, description: &'static str) -> Self {
        Self {
            ordinal,
            name,
            description,
        }
    }

    /// Wire ordinal
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Programmatic name (e.g. `"Comfort"`)
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Human readable description
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description
    }
}

/// First ordinal that occurs twice in `entries`
const fn first_duplicate(entries: &[EnumEntry]) -> Option<u8> {
    let mut i = 0;
    while i < entries.len() {
        let mut j = i + 1;
        while j < entries.len() {
            if entries[i].ordinal == entries[j].ordinal {
                return Some(entries[i].ordinal);
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Read-only view over entries with unique ordinals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnumRegistry<'a> {
    entries: &'a [EnumEntry],
}

impl<'a> EnumRegistry<'a> {
    /// Wrap a table of entries
    ///
    /// # Panics
    ///
    /// Panics if two entries share an ordinal. In a `const` item this is a
    /// compile error.
    pub const fn new(entries: &'a [EnumEntry]) -> Self {
        if first_duplicate(entries).is_some() {
            panic!("duplicate ordinal in enumeration registry");
        }
        Self { entries }
    }

    /// Wrap a table of entries built at run time
    ///
    /// # Errors
    ///
    /// Returns an illegal-argument error if two entries share an ordinal.
    pub fn try_new(entries: &'a [EnumEntry]) -> Result<Self> {
        if let Some(ordinal) = first_duplicate(entries) {
            crate::dpt_log!(warn, "Duplicate enumeration ordinal {}", ordinal);
            return Err(KnxError::illegal_argument("duplicate enumeration ordinal"));
        }
        Ok(Self { entries })
    }

    /// All entries in registration order
    pub fn entries(&self) -> &'a [EnumEntry] {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by ordinal
    pub fn get(&self, ordinal: u8) -> Option<&'a EnumEntry> {
        self.entries.iter().find(|e| e.ordinal == ordinal)
    }

    /// Look up an entry by exact programmatic name
    pub fn by_name(&self, name: &str) -> Option<&'a EnumEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Look up an entry by exact description
    pub fn by_description(&self, description: &str) -> Option<&'a EnumEntry> {
        self.entries.iter().find(|e| e.description == description)
    }

    /// Resolve text: numeric ordinal, then name, then description
    pub fn find(&self, text: &str) -> Option<&'a EnumEntry> {
        if let Some(ordinal) = parse_u8(text) {
            return self.get(ordinal);
        }
        self.by_name(text).or_else(|| self.by_description(text))
    }
}

/// Fixed-capacity registry assembled one entry at a time
#[derive(Debug, Clone, Default)]
pub struct EnumRegistryBuilder<const N: usize> {
    entries: heapless::Vec<EnumEntry, N>,
}

impl<const N: usize> EnumRegistryBuilder<N> {
    /// Create an empty builder
    pub const fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
        }
    }

    /// Register an entry
    ///
    /// # Errors
    ///
    /// Returns an illegal-argument error if the ordinal is already registered
    /// or the builder is full.
    pub fn add_value(&mut self, entry: EnumEntry) -> Result<()> {
        if self.entries.iter().any(|e| e.ordinal == entry.ordinal) {
            crate::dpt_log!(warn, "Duplicate enumeration ordinal {}", entry.ordinal);
            return Err(KnxError::illegal_argument("duplicate enumeration ordinal"));
        }
        if self.entries.push(entry).is_err() {
            crate::dpt_log!(warn, "Enumeration registry full ({} entries)", N);
            return Err(KnxError::illegal_argument("enumeration registry is full"));
        }
        crate::dpt_log!(trace, "Registered enumeration value {} = {}", entry.ordinal, entry.name);
        Ok(())
    }

    /// Chaining form of [`add_value`](Self::add_value)
    pub fn with_value(mut self, entry: EnumEntry) -> Result<Self> {
        self.add_value(entry)?;
        Ok(self)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the registered entries as a registry
    pub fn registry(&self) -> EnumRegistry<'_> {
        // Ordinals are unique by construction
        EnumRegistry {
            entries: self.entries.as_slice(),
        }
    }
}

/// Enumeration codec over a registry
///
/// One-byte families use the whole byte as ordinal; two-bit families
/// (DPT 23) only look at the two least significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnumDpt<'a> {
    id: &'static str,
    description: &'static str,
    registry: EnumRegistry<'a>,
    mask: u8,
}

impl<'a> EnumDpt<'a> {
    /// One-byte enumeration
    pub const fn new(id: &'static str, description: &'static str, registry: EnumRegistry<'a>) -> Self {
        Self {
            id,
            description,
            registry,
            mask: BYTE_MASK,
        }
    }

    /// Two-bit enumeration
    pub const fn two_bit(id: &'static str, description: &'static str, registry: EnumRegistry<'a>) -> Self {
        Self {
            id,
            description,
            registry,
            mask: TWO_BIT_MASK,
        }
    }

    /// Get the DPT identifier string
    pub const fn identifier(&self) -> &'static str {
        self.id
    }

    /// Get the subtype name
    pub const fn name(&self) -> &'static str {
        self.description
    }

    /// Registry behind this codec
    pub const fn registry(&self) -> EnumRegistry<'a> {
        self.registry
    }

    /// Create a value from an ordinal
    ///
    /// # Errors
    ///
    /// Returns an enum-not-found error for unregistered ordinals.
    pub fn of(&self, ordinal: u8) -> Result<EnumValue<'a>> {
        let entry = self
            .registry
            .get(ordinal)
            .filter(|e| e.ordinal & !self.mask == 0)
            .ok_or_else(|| KnxError::enum_ordinal_not_found(self.id, ordinal))?;
        Ok(EnumValue { dpt: *self, entry: *entry })
    }

    /// Create a value from its programmatic name
    ///
    /// # Errors
    ///
    /// Returns an enum-not-found error for unknown names.
    pub fn of_name(&self, name: &str) -> Result<EnumValue<'a>> {
        let entry = self
            .registry
            .by_name(name)
            .ok_or_else(|| KnxError::enum_not_found(self.id, &[name]))?;
        Ok(EnumValue { dpt: *self, entry: *entry })
    }

    /// Encode an ordinal to its wire byte
    pub fn encode_to_bytes(&self, ordinal: u8) -> Result<[u8; 1]> {
        Ok([self.of(ordinal)?.ordinal()])
    }
}

/// Decoded enumeration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnumValue<'a> {
    dpt: EnumDpt<'a>,
    entry: EnumEntry,
}

impl<'a> EnumValue<'a> {
    /// Codec of this value
    pub fn dpt(&self) -> EnumDpt<'a> {
        self.dpt
    }

    /// Registry entry
    pub fn entry(&self) -> EnumEntry {
        self.entry
    }

    /// Wire ordinal
    pub fn ordinal(&self) -> u8 {
        self.entry.ordinal
    }

    /// Programmatic name
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// Human readable description
    pub fn description(&self) -> &'static str {
        self.entry.description
    }
}

impl DataPointValue for EnumValue<'_> {
    fn dpt_id(&self) -> &'static str {
        self.dpt.id
    }

    fn to_payload(&self) -> Payload {
        payload(&[self.entry.ordinal])
    }
}

impl fmt::Display for EnumValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry.description)
    }
}

impl<'a> DataPointType for EnumDpt<'a> {
    type Value = EnumValue<'a>;

    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn is_compatible(&self, data: &[u8]) -> bool {
        data.len() == 1
    }

    fn is_compatible_syntax(&self, args: &[&str]) -> bool {
        args.first().is_some_and(|token| !token.is_empty())
    }

    fn decode(&self, data: &[u8]) -> Result<EnumValue<'a>> {
        let byte = single_byte(self.id, data)?;
        self.of(byte & self.mask)
    }

    fn decode_syntax(&self, args: &[&str]) -> Result<EnumValue<'a>> {
        let entry = join_tokens::<MAX_PAYLOAD_LEN>(args)
            .and_then(|text| self.registry.find(&text))
            .filter(|e| e.ordinal & !self.mask == 0)
            .ok_or_else(|| KnxError::enum_not_found(self.id, args))?;
        Ok(EnumValue { dpt: *self, entry: *entry })
    }
}

#[cfg(feature = "sync")]
pub use shared::SharedEnumRegistry;

#[cfg(feature = "sync")]
mod shared {
    use core::cell::RefCell;
    use core::fmt;

    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_sync::blocking_mutex::Mutex;

    use super::{EnumEntry, EnumRegistry, EnumRegistryBuilder};
    use crate::error::{KnxError, Result};

    /// Registry open to late registration from several execution contexts
    ///
    /// Writers are serialized through a critical section. Readers see a
    /// consistent snapshot for the duration of [`with_registry`](Self::with_registry).
    ///
    /// ```rust
    /// use knx_dpt::dpt::{DataPointType, EnumDpt, EnumEntry, SharedEnumRegistry};
    ///
    /// static MODES: SharedEnumRegistry<8> = SharedEnumRegistry::new();
    ///
    /// MODES.add_value(EnumEntry::new(0, "Idle", "idle"))?;
    /// MODES.add_value(EnumEntry::new(1, "Busy", "busy"))?;
    ///
    /// let name = MODES.with_registry(|registry| {
    ///     let dpt = EnumDpt::new("20.999", "Mode", registry);
    ///     dpt.parse(&[0x01]).map(|value| value.name())
    /// })?;
    /// assert_eq!(name, "Busy");
    /// # Ok::<(), knx_dpt::KnxError>(())
    /// ```
    pub struct SharedEnumRegistry<const N: usize> {
        inner: Mutex<CriticalSectionRawMutex, RefCell<EnumRegistryBuilder<N>>>,
    }

    impl<const N: usize> SharedEnumRegistry<N> {
        /// Create an empty registry, usable in a `static`
        pub const fn new() -> Self {
            Self {
                inner: Mutex::new(RefCell::new(EnumRegistryBuilder::new())),
            }
        }

        /// Register an entry
        ///
        /// # Errors
        ///
        /// Returns an illegal-argument error for duplicate ordinals, a full
        /// registry, or when called from inside [`with_registry`](Self::with_registry).
        pub fn add_value(&self, entry: EnumEntry) -> Result<()> {
            self.inner.lock(|cell| {
                let Ok(mut builder) = cell.try_borrow_mut() else {
                    return Err(KnxError::illegal_argument("enumeration registry is being read"));
                };
                builder.add_value(entry)
            })
        }

        /// Look up an entry by ordinal
        pub fn get(&self, ordinal: u8) -> Option<EnumEntry> {
            self.with_registry(|registry| registry.get(ordinal).copied())
        }

        /// Resolve text: numeric ordinal, then name, then description
        pub fn find(&self, text: &str) -> Option<EnumEntry> {
            self.with_registry(|registry| registry.find(text).copied())
        }

        /// Number of registered entries
        pub fn len(&self) -> usize {
            self.with_registry(|registry| registry.len())
        }

        /// Check if nothing is registered yet
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Run `f` with a read-only view of the current entries
        pub fn with_registry<R>(&self, f: impl FnOnce(EnumRegistry<'_>) -> R) -> R {
            // Mutable borrows never outlive `add_value`, which does not call out
            self.inner.lock(|cell| f(cell.borrow().registry()))
        }
    }

    impl<const N: usize> Default for SharedEnumRegistry<N> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<const N: usize> fmt::Debug for SharedEnumRegistry<N> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("SharedEnumRegistry")
                .field("capacity", &N)
                .field("len", &self.len())
                .finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODE_ENTRIES: &[EnumEntry] = &[
        EnumEntry::new(0, "Auto", "Auto"),
        EnumEntry::new(1, "Comfort", "Comfort"),
        EnumEntry::new(4, "BuildingProtection", "Building Protection"),
    ];
    const MODE: EnumDpt<'static> = EnumDpt::new("20.102", "HVAC mode", EnumRegistry::new(MODE_ENTRIES));

    #[test]
    fn test_decode_by_ordinal() {
        let value = MODE.parse(&[0x04]).unwrap();
        assert_eq!(value.name(), "BuildingProtection");
        assert_eq!(value.to_string(), "Building Protection");
        assert_eq!(value.to_payload().as_slice(), &[0x04]);
        assert_eq!(value.dpt_id(), "20.102");
    }

    #[test]
    fn test_unknown_ordinal() {
        let err = MODE.parse(&[0x02]).unwrap_err();
        assert!(err.is_enum_not_found());
        let KnxError::Enum(e) = err else {
            panic!("expected enum error");
        };
        assert_eq!(e.dpt_id(), "20.102");
        assert_eq!(e.input(), "2");
    }

    #[test]
    fn test_decode_syntax_lookup_order() {
        assert_eq!(MODE.parse_syntax(&["1"]).unwrap().name(), "Comfort");
        assert_eq!(MODE.parse_syntax(&["Comfort"]).unwrap().ordinal(), 1);
        assert_eq!(MODE.parse_syntax(&["Building", "Protection"]).unwrap().ordinal(), 4);
        assert_eq!(MODE.parse_syntax(&["BuildingProtection"]).unwrap().ordinal(), 4);

        let err = MODE.parse_syntax(&["Standby"]).unwrap_err();
        assert!(err.is_enum_not_found());
        assert!(MODE.parse_syntax(&["3"]).unwrap_err().is_enum_not_found());
        assert!(MODE.parse_syntax(&[""]).unwrap_err().is_incompatible_syntax());
    }

    #[test]
    fn test_wrong_length() {
        assert!(MODE.parse(&[0x00, 0x01]).unwrap_err().is_incompatible_bytes());
    }

    #[test]
    fn test_try_new_rejects_duplicates() {
        let entries = [EnumEntry::new(1, "A", "a"), EnumEntry::new(1, "B", "b")];
        assert!(EnumRegistry::try_new(&entries).unwrap_err().is_illegal_argument());

        let entries = [EnumEntry::new(1, "A", "a"), EnumEntry::new(2, "B", "b")];
        let registry = EnumRegistry::try_new(&entries).unwrap();
        assert_eq!(registry.get(2).unwrap().name(), "B");
        assert_eq!(registry.by_name("A").unwrap().ordinal(), 1);
        assert_eq!(registry.by_description("b").unwrap().ordinal(), 2);
    }

    #[test]
    #[should_panic(expected = "duplicate ordinal")]
    fn test_new_panics_on_duplicates() {
        let entries = [EnumEntry::new(7, "A", "a"), EnumEntry::new(7, "B", "b")];
        let _ = EnumRegistry::new(&entries);
    }

    #[test]
    fn test_builder() {
        let mut builder = EnumRegistryBuilder::<2>::new();
        builder.add_value(EnumEntry::new(0, "Off", "off")).unwrap();
        assert!(builder
            .add_value(EnumEntry::new(0, "Other", "other"))
            .unwrap_err()
            .is_illegal_argument());
        builder.add_value(EnumEntry::new(1, "On", "on")).unwrap();
        assert!(builder
            .add_value(EnumEntry::new(2, "Toggle", "toggle"))
            .unwrap_err()
            .is_illegal_argument());
        assert_eq!(builder.len(), 2);

        let dpt = EnumDpt::new("20.999", "Test", builder.registry());
        assert_eq!(dpt.parse(&[0x01]).unwrap().name(), "On");
        assert_eq!(dpt.parse_syntax(&["off"]).unwrap().ordinal(), 0);
    }

    #[test]
    fn test_two_bit_mask() {
        const ENTRIES: &[EnumEntry] = &[EnumEntry::new(0, "Up", "up"), EnumEntry::new(1, "Down", "down")];
        let dpt = EnumDpt::two_bit("23.003", "Up/Down", EnumRegistry::new(ENTRIES));
        assert_eq!(dpt.parse(&[0xFD]).unwrap().name(), "Down");
        assert_eq!(dpt.parse(&[0xFD]).unwrap().to_payload().as_slice(), &[0x01]);
    }

    #[test]
    fn test_of_and_encode() {
        assert_eq!(MODE.encode_to_bytes(4).unwrap(), [0x04]);
        assert!(MODE.encode_to_bytes(9).unwrap_err().is_enum_not_found());
        assert_eq!(MODE.of_name("Auto").unwrap().ordinal(), 0);
        assert!(MODE.of_name("auto").unwrap_err().is_enum_not_found());
    }

    #[cfg(feature = "sync")]
    #[test]
    fn test_shared_registry() {
        static SHARED: SharedEnumRegistry<4> = SharedEnumRegistry::new();
        assert!(SHARED.is_empty());
        SHARED.add_value(EnumEntry::new(3, "Night", "night mode")).unwrap();
        assert!(SHARED
            .add_value(EnumEntry::new(3, "Day", "day mode"))
            .unwrap_err()
            .is_illegal_argument());
        assert_eq!(SHARED.get(3).unwrap().name(), "Night");
        assert_eq!(SHARED.find("night mode").unwrap().ordinal(), 3);

        let nested = SHARED.with_registry(|_| SHARED.add_value(EnumEntry::new(4, "Day", "day mode")));
        assert!(nested.unwrap_err().is_illegal_argument());
        assert_eq!(SHARED.len(), 1);
    }
}
