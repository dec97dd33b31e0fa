//! Applicative lifting of plain functions over several outcomes.
//!
//! `liftN(function, a, b, ..)` applies `function` to the unwrapped values
//! when every argument is `Ok`, and otherwise returns the first `Err` in
//! argument order. Arities two to six are provided; [`sequence`] covers the
//! homogeneous, unbounded case.
//!
//! [`sequence`]: super::sequence
//!
//! # Examples
//!
//! ```rust
//! use outcomes::combinator::lift3;
//! use outcomes::control::Outcome;
//!
//! let volume: Outcome<&str, u32> = lift3(
//!     |w, h, d| w * h * d,
//!     Outcome::Ok(2),
//!     Outcome::Ok(3),
//!     Outcome::Ok(4),
//! );
//! assert_eq!(volume, Outcome::Ok(24));
//! ```

use crate::control::Outcome;

macro_rules! define_lift {
    ($arity:literal; $($value:ident: $type:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Applies `function` to ", stringify!($arity),
                " successful values, or returns the first `Err` in argument order."
            )]
            pub fn [<lift $arity>]<E, $($type,)+ R, F>(
                function: F,
                $($value: Outcome<E, $type>),+
            ) -> Outcome<E, R>
            where
                F: FnOnce($($type),+) -> R,
            {
                $(
                    let $value = match $value {
                        Outcome::Ok(value) => value,
                        Outcome::Err(error) => return Outcome::Err(error),
                    };
                )+
                Outcome::Ok(function($($value),+))
            }
        }
    };
}

define_lift!(2; first: T1, second: T2);
define_lift!(3; first: T1, second: T2, third: T3);
define_lift!(4; first: T1, second: T2, third: T3, fourth: T4);
define_lift!(5; first: T1, second: T2, third: T3, fourth: T4, fifth: T5);
define_lift!(6; first: T1, second: T2, third: T3, fourth: T4, fifth: T5, sixth: T6);
