#[macro_export]
macro_rules! impl_wrap_from_many {
    ($t:ident, $m:ident, [$($var:ident),*]) => {
        $(impl From<$m::$var> for $t {
            fn from(m: $m::$var) -> Self {
                $t::$var(m)
            }
        })*
    };
}

#[cfg(test)]
pub fn approx_eq(x: f32, y: f32, tol: f32) -> bool {
    (x - y).abs() <= tol
}
