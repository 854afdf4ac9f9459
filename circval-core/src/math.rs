//! `f64` intrinsics that `core` lacks, routed to `libm` without `std`.

#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

macro_rules! unary {
    ($($name:ident),+ $(,)?) => {
        $(
            #[inline]
            pub(crate) fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                {
                    x.$name()
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$name(x)
                }
            }
        )+
    };
}

unary!(sin, cos, tan, asin, acos, atan);

#[inline]
pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::atan2(y, x)
    }
}
