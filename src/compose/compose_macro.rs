//! The `compose!` macro.
//!
//! Shorthand for building a [`Composition`](crate::compose::Composition) and
//! finishing it in one expression.

/// Builds a composed function from a final function and its components.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (identity base case)
/// - `compose!(f; g1, g2, ...)` - Returns `h` with `h(args) = f(g1(args), g2(args), ...)`
/// - `compose!(f; g1; g2)` - Chained composition, `f(g1(g2(args)))`
///
/// # Examples
///
/// ```
/// use fntoolbox::compose;
/// use fntoolbox::function::Function;
///
/// let sum: Function<i32, i32> = Function::total(|arguments| arguments.iter().sum());
/// let double: Function<i32, i32> = Function::total(|arguments| arguments[0] * 2);
/// let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
///
/// let combined = compose!(sum; double, square);
/// assert_eq!(combined.call(&[3]), Ok(15));
/// ```
///
/// ## Chained stages
///
/// ```
/// use fntoolbox::compose;
/// use fntoolbox::function::Function;
///
/// let add_one: Function<i32, i32> = Function::total(|arguments| arguments[0] + 1);
/// let double: Function<i32, i32> = Function::total(|arguments| arguments[0] * 2);
/// let square: Function<i32, i32> = Function::total(|arguments| arguments[0] * arguments[0]);
///
/// // add_one(double(square(3))) = add_one(18) = 19
/// let chained = compose!(add_one; double; square);
/// assert_eq!(chained.call(&[3]), Ok(19));
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($final_function:expr $(,)?) => {
        $crate::compose::compose($final_function).into_function()
    };

    // One or more stages, each a comma separated list of components
    ($final_function:expr $(; $($component:expr),+)+ $(;)?) => {{
        $crate::compose::compose($final_function)
            $(.of([$($component),+]))+
            .into_function()
    }};
}

#[cfg(test)]
mod tests {
    use crate::function::Function;

    fn double() -> Function<i32, i32> {
        Function::total(|arguments| arguments[0] * 2)
    }

    #[test]
    fn test_compose_single() {
        let original = double();
        let composed = compose!(original.clone());
        assert!(composed.ptr_eq(&original));
    }

    #[test]
    fn test_compose_fan_out() {
        let product: Function<i32, i32> = Function::total(|arguments| arguments.iter().product());
        let add_one: Function<i32, i32> = Function::total(|arguments| arguments[0] + 1);
        let composed = compose!(product; double(), add_one);
        assert_eq!(composed.call(&[5]), Ok(60));
    }

    #[test]
    fn test_compose_stages() {
        let add_one: Function<i32, i32> = Function::total(|arguments| arguments[0] + 1);
        let composed = compose!(add_one; double(); double());
        assert_eq!(composed.call(&[3]), Ok(13));
    }
}
