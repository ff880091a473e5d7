/// Transforms arguments to values bound to a statement.
///
/// A plain list produces positional values, `name => value` pairs produce
/// named values.
#[macro_export]
macro_rules! query_args {
    ($($value:expr),*) => {
        {
            let mut values = $crate::query::QueryValues::new();
            $(
                values.push_positional($value);
            )*
            values
        }
    };
    ($($name:expr => $value:expr),*) => {
        {
            let mut values = $crate::query::QueryValues::new();
            $(
                values.insert_named($name, $value);
            )*
            values
        }
    };
}
