//! Mathematical Constants Module
//!
//! Reference values the series approximations are checked against. Each one
//! is stored as a literal carrying more digits than `Decimal50` keeps and is
//! rounded once on construction.

use entities_numerics::{ArithmeticResult, Decimal50};

const PI: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164";
const E: &str = "2.7182818284590452353602874713526624977572470936999595749669676277240766";
const SIN_QUARTER_PI: &str =
    "0.7071067811865475244008443621048490392848359376884740365883398689953662";
const COS_SIXTH_PI: &str =
    "0.8660254037844386467637231707529361834714026269051903140279034897259665";
const TAN_THIRD_PI: &str =
    "1.7320508075688772935274463415058723669428052538103806280558069794519330";
const COSH_FIVE_SIXTHS_PI: &str =
    "6.8905723649758825753689424593242955998056288393045907648173021434380520";
const ASINH_THREE_TENTHS: &str =
    "0.2956730475634224391027105297335170824513810118353705780864738126567147";
const LN_ONE_POINT_FOUR_SIX: &str =
    "0.3784364357202450704733580695279907237780500019743069666497230647200384";
// (1.2)^(-1/3)
const INVERSE_CUBE_ROOT_SIX_FIFTHS: &str =
    "0.9410360288810284910775527270146291379979170939917868202810104840856497";

/// Constants and reference values at 50 significant digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathConstants {
    pub pi: Decimal50,
    pub e: Decimal50,
    pub sin_quarter_pi: Decimal50,
    pub cos_sixth_pi: Decimal50,
    pub tan_third_pi: Decimal50,
    pub cosh_five_sixths_pi: Decimal50,
    pub asinh_three_tenths: Decimal50,
    pub ln_one_point_four_six: Decimal50,
    pub inverse_cube_root_six_fifths: Decimal50,
}

impl MathConstants {
    pub fn new() -> ArithmeticResult<Self> {
        Ok(Self {
            pi: PI.parse()?,
            e: E.parse()?,
            sin_quarter_pi: SIN_QUARTER_PI.parse()?,
            cos_sixth_pi: COS_SIXTH_PI.parse()?,
            tan_third_pi: TAN_THIRD_PI.parse()?,
            cosh_five_sixths_pi: COSH_FIVE_SIXTHS_PI.parse()?,
            asinh_three_tenths: ASINH_THREE_TENTHS.parse()?,
            ln_one_point_four_six: LN_ONE_POINT_FOUR_SIX.parse()?,
            inverse_cube_root_six_fifths: INVERSE_CUBE_ROOT_SIX_FIFTHS.parse()?,
        })
    }

    /// pi / 4
    pub fn quarter_pi(&self) -> ArithmeticResult<Decimal50> {
        self.pi_over(4)
    }

    /// pi / 6
    pub fn sixth_pi(&self) -> ArithmeticResult<Decimal50> {
        self.pi_over(6)
    }

    /// pi / 3
    pub fn third_pi(&self) -> ArithmeticResult<Decimal50> {
        self.pi_over(3)
    }

    fn pi_over(&self, divisor: u64) -> ArithmeticResult<Decimal50> {
        self.pi.checked_div(&Decimal50::from_u64(divisor)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal50 {
        s.parse().unwrap()
    }

    #[test]
    fn test_literals_round_to_fifty_digits() {
        let constants = MathConstants::new().unwrap();
        assert_eq!(
            constants.pi.to_string(),
            "3.1415926535897932384626433832795028841971693993751"
        );
        assert_eq!(
            constants.e.to_string(),
            "2.7182818284590452353602874713526624977572470937"
        );
    }

    #[test]
    fn test_pi_fractions() {
        let constants = MathConstants::new().unwrap();
        let quarter = constants.quarter_pi().unwrap();
        let back = quarter.checked_mul(&dec("4")).unwrap();
        let error = back.checked_sub(&constants.pi).unwrap().abs();
        assert!(error < dec("1e-48"));
        assert!(constants.sixth_pi().unwrap() < constants.quarter_pi().unwrap());
        assert!(constants.quarter_pi().unwrap() < constants.third_pi().unwrap());
    }

    #[test]
    fn test_algebraic_references_match_decimal_sqrt() {
        let constants = MathConstants::new().unwrap();
        let two = dec("2");
        let three = dec("3");
        let sqrt3 = three.sqrt().unwrap();
        assert_eq!(sqrt3, constants.tan_third_pi);

        let half_sqrt2 = two.sqrt().unwrap().checked_div(&two).unwrap();
        let error = half_sqrt2.checked_sub(&constants.sin_quarter_pi).unwrap().abs();
        assert!(error < dec("1e-49"));

        let half_sqrt3 = sqrt3.checked_div(&two).unwrap();
        let error = half_sqrt3.checked_sub(&constants.cos_sixth_pi).unwrap().abs();
        assert!(error < dec("1e-49"));
    }
}
