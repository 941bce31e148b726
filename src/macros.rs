//! Internal macros shared by the DPT family modules.

/// Implements [`DataPointType`](crate::dpt::DataPointType) for a
/// [`ScaledInteger`](crate::dpt::ScaledInteger) family enum, plus the typed
/// constructors and the static encoder.
///
/// # Syntax
///
/// ```text
/// impl_integer_dpt!(FamilyEnum, wire_int);
/// ```
///
/// The family enum must provide `identifier()`, `name()` and
/// `unit_symbol()` as inherent methods. `wire_int` is the primitive used for
/// the byte layout of `encode_to_bytes` (`u8`, `i16`, ...).
///
/// # Generated items
///
/// - `impl DataPointType for FamilyEnum` with `Value = IntegerValue<FamilyEnum>`
/// - `FamilyEnum::of(value)` from the physical value
/// - `FamilyEnum::of_raw(raw)` from the wire code
/// - `FamilyEnum::encode_to_bytes(value)` returning the big-endian array
macro_rules! impl_integer_dpt {
    ($dpt:ty, $wire:ty) => {
        impl $crate::dpt::DataPointType for $dpt {
            type Value = $crate::dpt::IntegerValue<$dpt>;

            fn id(&self) -> &'static str {
                self.identifier()
            }

            fn description(&self) -> &'static str {
                self.name()
            }

            fn unit(&self) -> Option<&'static str> {
                self.unit_symbol()
            }

            fn is_compatible(&self, data: &[u8]) -> bool {
                $crate::dpt::integer::is_integer_payload::<$dpt>(data)
            }

            fn is_compatible_syntax(&self, args: &[&str]) -> bool {
                $crate::dpt::integer::is_integer_syntax(self, args)
            }

            fn decode(&self, data: &[u8]) -> $crate::error::Result<Self::Value> {
                $crate::dpt::integer::decode_integer(*self, data)
            }

            fn decode_syntax(&self, args: &[&str]) -> $crate::error::Result<Self::Value> {
                $crate::dpt::integer::decode_integer_syntax(*self, args)
            }
        }

        impl $dpt {
            /// Create a value from its physical representation
            ///
            /// # Errors
            ///
            /// Returns an out-of-range error outside the subtype range.
            pub fn of(self, value: impl Into<f64>) -> $crate::error::Result<$crate::dpt::IntegerValue<$dpt>> {
                $crate::dpt::IntegerValue::of(self, value.into())
            }

            /// Create a value from its raw wire code
            ///
            /// # Errors
            ///
            /// Returns an out-of-range error if the code does not fit the
            /// wire width or maps outside the subtype range.
            pub fn of_raw(self, raw: i64) -> $crate::error::Result<$crate::dpt::IntegerValue<$dpt>> {
                $crate::dpt::IntegerValue::of_raw(self, raw)
            }

            /// Encode a physical value to its big-endian wire bytes
            ///
            /// # Errors
            ///
            /// Returns an out-of-range error outside the subtype range.
            pub fn encode_to_bytes(
                self,
                value: impl Into<f64>,
            ) -> $crate::error::Result<[u8; core::mem::size_of::<$wire>()]> {
                let raw = self.of(value)?.raw();
                Ok((raw as $wire).to_be_bytes())
            }
        }
    };
}

/// Declares a `const` [`EnumDpt`](crate::dpt::EnumDpt) over a static table.
///
/// # Syntax
///
/// ```text
/// enum_dpt! {
///     /// docs
///     NAME = new("20.102", "HVAC mode") {
///         0 => "Auto", "Auto";
///         1 => "Comfort", "Comfort";
///     }
/// }
/// ```
///
/// `new` builds a one-byte enumeration, `two_bit` a two-bit one. Duplicate
/// ordinals fail to compile.
macro_rules! enum_dpt {
    ($(
        $(#[$meta:meta])*
        $name:ident = $ctor:ident($id:literal, $description:literal) {
            $($ordinal:literal => $variant:literal, $text:literal;)+
        }
    )+) => {
        $(
            $(#[$meta])*
            pub const $name: $crate::dpt::EnumDpt<'static> = {
                const ENTRIES: &[$crate::dpt::EnumEntry] = &[
                    $($crate::dpt::EnumEntry::new($ordinal, $variant, $text),)+
                ];
                $crate::dpt::EnumDpt::$ctor($id, $description, $crate::dpt::EnumRegistry::new(ENTRIES))
            };
        )+
    };
}
