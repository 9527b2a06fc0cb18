use std::fmt;

/// Canonical constants every numeric type can manufacture.
///
/// For a tower built over a real leaf, the constants read:
/// - `Zero`: all leaves zero
/// - `RealOne`: the multiplicative identity
/// - `SpecialOne`: the generator adjoined by the outermost construction
/// - `UnitsOne`: one plus every generator of the tower
/// - `NonRealUnitsOne`: the sum of every generator
/// - `CombinedOne`: the product of every generator (highest basis unit)
/// - `AllOne`: every leaf set to one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullary {
    Zero,
    RealOne,
    SpecialOne,
    UnitsOne,
    NonRealUnitsOne,
    CombinedOne,
    AllOne,
}

impl Nullary {
    pub const ALL: [Nullary; 7] = [
        Nullary::Zero,
        Nullary::RealOne,
        Nullary::SpecialOne,
        Nullary::UnitsOne,
        Nullary::NonRealUnitsOne,
        Nullary::CombinedOne,
        Nullary::AllOne,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Nullary::Zero => "zero",
            Nullary::RealOne => "real_one",
            Nullary::SpecialOne => "special_one",
            Nullary::UnitsOne => "units_one",
            Nullary::NonRealUnitsOne => "non_real_units_one",
            Nullary::CombinedOne => "combined_one",
            Nullary::AllOne => "all_one",
        }
    }
}

/// Single-operand operations returning a value of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unary {
    Negate,
    Increment,
    Decrement,
    /// Multiplicative inverse.
    Inverse,
    Conjugate,
    /// Magnitude embedded back into the type (real-valued).
    Modulus,
    Double,
    Half,
    Square,
    SquareRoot,
    /// Natural exponential `e^x`.
    Exponentiate,
    /// Natural logarithm.
    Logarithm,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    HyperbolicSine,
    HyperbolicCosine,
    HyperbolicTangent,
}

impl Unary {
    pub const ALL: [Unary; 21] = [
        Unary::Negate,
        Unary::Increment,
        Unary::Decrement,
        Unary::Inverse,
        Unary::Conjugate,
        Unary::Modulus,
        Unary::Double,
        Unary::Half,
        Unary::Square,
        Unary::SquareRoot,
        Unary::Exponentiate,
        Unary::Logarithm,
        Unary::Sine,
        Unary::Cosine,
        Unary::Tangent,
        Unary::ArcSine,
        Unary::ArcCosine,
        Unary::ArcTangent,
        Unary::HyperbolicSine,
        Unary::HyperbolicCosine,
        Unary::HyperbolicTangent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Unary::Negate => "negate",
            Unary::Increment => "increment",
            Unary::Decrement => "decrement",
            Unary::Inverse => "inverse",
            Unary::Conjugate => "conjugate",
            Unary::Modulus => "modulus",
            Unary::Double => "double",
            Unary::Half => "half",
            Unary::Square => "square",
            Unary::SquareRoot => "square_root",
            Unary::Exponentiate => "exponentiate",
            Unary::Logarithm => "logarithm",
            Unary::Sine => "sine",
            Unary::Cosine => "cosine",
            Unary::Tangent => "tangent",
            Unary::ArcSine => "arc_sine",
            Unary::ArcCosine => "arc_cosine",
            Unary::ArcTangent => "arc_tangent",
            Unary::HyperbolicSine => "hyperbolic_sine",
            Unary::HyperbolicCosine => "hyperbolic_cosine",
            Unary::HyperbolicTangent => "hyperbolic_tangent",
        }
    }

    /// Whether this is an exponential, logarithmic or trigonometric function.
    pub fn is_transcendental(self) -> bool {
        matches!(
            self,
            Unary::Exponentiate
                | Unary::Logarithm
                | Unary::Sine
                | Unary::Cosine
                | Unary::Tangent
                | Unary::ArcSine
                | Unary::ArcCosine
                | Unary::ArcTangent
                | Unary::HyperbolicSine
                | Unary::HyperbolicCosine
                | Unary::HyperbolicTangent
        )
    }
}

/// Two-operand operations returning a value of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binary {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Binary {
    pub const ALL: [Binary; 5] = [
        Binary::Add,
        Binary::Subtract,
        Binary::Multiply,
        Binary::Divide,
        Binary::Power,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Binary::Add => "add",
            Binary::Subtract => "subtract",
            Binary::Multiply => "multiply",
            Binary::Divide => "divide",
            Binary::Power => "power",
        }
    }
}

/// Projections from a value down to its leaf scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    AbsoluteValue,
    RealPart,
}

impl Primitive {
    pub const ALL: [Primitive; 2] = [Primitive::AbsoluteValue, Primitive::RealPart];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::AbsoluteValue => "absolute_value",
            Primitive::RealPart => "real_part",
        }
    }
}

/// Any operation kind, tagged with its arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Nullary(Nullary),
    Unary(Unary),
    Binary(Binary),
    Primitive(Primitive),
}

impl OpKind {
    /// Number of operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            OpKind::Nullary(_) => 0,
            OpKind::Unary(_) | OpKind::Primitive(_) => 1,
            OpKind::Binary(_) => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OpKind::Nullary(op) => op.name(),
            OpKind::Unary(op) => op.name(),
            OpKind::Binary(op) => op.name(),
            OpKind::Primitive(op) => op.name(),
        }
    }

    /// Every kind in the vocabulary, nullary first.
    pub fn all() -> impl Iterator<Item = OpKind> {
        Nullary::ALL.into_iter().map(OpKind::from)
            .chain(Unary::ALL.into_iter().map(OpKind::from))
            .chain(Binary::ALL.into_iter().map(OpKind::from))
            .chain(Primitive::ALL.into_iter().map(OpKind::from))
    }

    /// Look a kind up by its snake_case name, e.g. `"square_root"`.
    pub fn from_name(name: &str) -> Option<OpKind> {
        Self::all().find(|op| op.name() == name)
    }
}

impl From<Nullary> for OpKind {
    fn from(op: Nullary) -> Self {
        OpKind::Nullary(op)
    }
}

impl From<Unary> for OpKind {
    fn from(op: Unary) -> Self {
        OpKind::Unary(op)
    }
}

impl From<Binary> for OpKind {
    fn from(op: Binary) -> Self {
        OpKind::Binary(op)
    }
}

impl From<Primitive> for OpKind {
    fn from(op: Primitive) -> Self {
        OpKind::Primitive(op)
    }
}

impl fmt::Display for Nullary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name(), self.arity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_is_closed() {
        assert_eq!(Nullary::ALL.len(), 7);
        assert_eq!(Unary::ALL.len(), 21);
        assert_eq!(Binary::ALL.len(), 5);
        assert_eq!(Primitive::ALL.len(), 2);
    }

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for op in OpKind::all() {
            assert!(seen.insert(op.name()), "duplicate name {}", op.name());
        }
        assert_eq!(seen.len(), 35);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(OpKind::from_name("cube"), None);
        assert_eq!(OpKind::from_name("arc_tangent"), Some(OpKind::Unary(Unary::ArcTangent)));
    }

    proptest::proptest! {
        #[test]
        fn test_name_lookup_roundtrips(op in proptest::sample::select(OpKind::all().collect::<Vec<_>>())) {
            proptest::prop_assert_eq!(OpKind::from_name(op.name()), Some(op));
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(OpKind::from(Nullary::Zero).arity(), 0);
        assert_eq!(OpKind::from(Unary::Negate).arity(), 1);
        assert_eq!(OpKind::from(Primitive::RealPart).arity(), 1);
        assert_eq!(OpKind::from(Binary::Power).arity(), 2);
    }

    #[test]
    fn test_transcendental() {
        assert!(Unary::Exponentiate.is_transcendental());
        assert!(Unary::HyperbolicTangent.is_transcendental());
        assert!(!Unary::SquareRoot.is_transcendental());
        assert!(!Unary::Inverse.is_transcendental());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Unary::SquareRoot), "square_root");
        assert_eq!(format!("{}", OpKind::from(Binary::Divide)), "divide/2");
        assert_eq!(format!("{}", OpKind::from(Nullary::SpecialOne)), "special_one/0");
    }
}
