use crate::error;
use crate::lang::ast::{Ident, Index};
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Largest `DIM` length accepted.
pub const MAX_ARRAY_LEN: usize = 1 << 24;

/// ## Variable memory
///
/// Scalars are one element long. Names in `dims` are arrays and must
/// always be subscripted; everything else must never be.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Ident, Vec<f64>>,
    dims: HashMap<Ident, usize>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
        self.dims.clear();
    }

    pub fn is_array(&self, var_name: &Ident) -> bool {
        self.dims.contains_key(var_name)
    }

    pub fn fetch(&self, var_name: &Ident) -> Result<f64> {
        if self.is_array(var_name) {
            return Err(error!(TypeMismatch; &format!("{} IS AN ARRAY", var_name)));
        }
        match self.vars.get(var_name).and_then(|v| v.first()) {
            Some(val) => Ok(*val),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    pub fn store(&mut self, var_name: &Ident, value: f64) -> Result<()> {
        if self.is_array(var_name) {
            return Err(error!(TypeMismatch; &format!("{} IS AN ARRAY", var_name)));
        }
        self.vars.insert(var_name.clone(), vec![value]);
        Ok(())
    }

    pub fn fetch_array(&self, var_name: &Ident, index: &Index) -> Result<f64> {
        let offset = self.offset(var_name, index)?;
        match self.vars.get(var_name).and_then(|v| v.get(offset)) {
            Some(val) => Ok(*val),
            None => Err(error!(InternalError; "ARRAY STORAGE")),
        }
    }

    pub fn store_array(&mut self, var_name: &Ident, index: &Index, value: f64) -> Result<()> {
        let offset = self.offset(var_name, index)?;
        match self.vars.get_mut(var_name).and_then(|v| v.get_mut(offset)) {
            Some(val) => {
                *val = value;
                Ok(())
            }
            None => Err(error!(InternalError; "ARRAY STORAGE")),
        }
    }

    pub fn dimension_array(&mut self, var_name: &Ident, len: usize) -> Result<()> {
        if self.vars.contains_key(var_name) {
            return Err(error!(RedimensionedArray; var_name));
        }
        let mut values: Vec<f64> = Vec::new();
        if len > MAX_ARRAY_LEN || values.try_reserve_exact(len).is_err() {
            return Err(error!(OutOfMemory; &format!("{}[{}]", var_name, len)));
        }
        values.resize(len, 0.0);
        self.dims.insert(var_name.clone(), len);
        self.vars.insert(var_name.clone(), values);
        Ok(())
    }

    /// Turns a 1-based subscript into a storage offset.
    fn offset(&self, var_name: &Ident, index: &Index) -> Result<usize> {
        let len = match self.dims.get(var_name) {
            Some(len) => *len,
            None => {
                if self.vars.contains_key(var_name) {
                    return Err(error!(TypeMismatch; &format!("{} IS NOT AN ARRAY", var_name)));
                }
                return Err(error!(UndefinedVariable; var_name));
            }
        };
        let value = match index {
            Index::Literal(n) => *n,
            Index::Var(name) => {
                if self.is_array(name) {
                    return Err(error!(TypeMismatch; &format!("SUBSCRIPT {} IS AN ARRAY", name)));
                }
                self.fetch(name)?
            }
        };
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(error!(BadSubscript; &format!("{}[{}]", var_name, value)));
        }
        if value < 1.0 || value > len as f64 {
            return Err(error!(SubscriptOutOfRange; &format!("{}[{}]", var_name, value)));
        }
        Ok(value as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_filled_one_based() {
        let mut var = Var::new();
        let v: Ident = "V".into();
        var.dimension_array(&v, 5).unwrap();
        var.store_array(&v, &Index::Literal(3.0), 7.0).unwrap();
        assert_eq!(var.fetch_array(&v, &Index::Literal(3.0)), Ok(7.0));
        assert_eq!(var.fetch_array(&v, &Index::Literal(1.0)), Ok(0.0));
        assert!(var.fetch_array(&v, &Index::Literal(0.0)).is_err());
        assert!(var.fetch_array(&v, &Index::Literal(6.0)).is_err());
        assert!(var.fetch_array(&v, &Index::Literal(1.5)).is_err());
    }

    #[test]
    fn test_scalar_array_discipline() {
        let mut var = Var::new();
        let v: Ident = "V".into();
        let x: Ident = "X".into();
        var.dimension_array(&v, 5).unwrap();
        assert_eq!(var.store(&v, 1.0).unwrap_err().code(), 21);
        var.store(&x, 1.0).unwrap();
        assert_eq!(
            var.store_array(&x, &Index::Literal(1.0), 2.0)
                .unwrap_err()
                .code(),
            21
        );
        assert_eq!(var.dimension_array(&x, 3).unwrap_err().code(), 27);
    }

    #[test]
    fn test_oversized_array() {
        let mut var = Var::new();
        let v: Ident = "V".into();
        assert_eq!(var.dimension_array(&v, usize::max_value()).unwrap_err().code(), 30);
        assert_eq!(var.dimension_array(&v, MAX_ARRAY_LEN + 1).unwrap_err().code(), 30);
        assert!(!var.is_array(&v));
        var.dimension_array(&v, 3).unwrap();
    }

    #[test]
    fn test_variable_subscript() {
        let mut var = Var::new();
        let v: Ident = "V".into();
        let i: Ident = "I".into();
        var.dimension_array(&v, 3).unwrap();
        assert_eq!(
            var.fetch_array(&v, &Index::Var(i.clone())).unwrap_err().code(),
            20
        );
        var.store(&i, 2.0).unwrap();
        var.store_array(&v, &Index::Var(i.clone()), 9.0).unwrap();
        assert_eq!(var.fetch_array(&v, &Index::Literal(2.0)), Ok(9.0));
    }
}
