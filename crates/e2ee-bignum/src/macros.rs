//! Operator-trait plumbing shared by the arithmetic modules.

/// Implement a binary operator for every owned/borrowed operand combination,
/// forwarding to a function of two references.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:path) => {
        impl std::ops::$imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $func(self, rhs)
            }
        }

        impl std::ops::$imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $func(self, &rhs)
            }
        }

        impl std::ops::$imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $func(&self, rhs)
            }
        }

        impl std::ops::$imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $func(&self, &rhs)
            }
        }
    };
}

/// Implement a compound-assignment operator that replaces the receiver
/// with the result of the binary form.
macro_rules! forward_assign {
    ($imp:ident, $method:ident, $func:path) => {
        impl std::ops::$imp<&BigInteger> for BigInteger {
            fn $method(&mut self, rhs: &BigInteger) {
                *self = $func(self, rhs);
            }
        }

        impl std::ops::$imp<BigInteger> for BigInteger {
            fn $method(&mut self, rhs: BigInteger) {
                *self = $func(self, &rhs);
            }
        }
    };
}
