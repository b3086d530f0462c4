use crate::error;
use crate::lang::Error;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn arity(func_name: &str) -> Option<std::ops::RangeInclusive<usize>> {
        match func_name {
            "ABS" | "COS" | "EXP" | "LOG" | "SIN" | "SQR" | "TAN" => Some(1..=1),
            "RND" => Some(0..=usize::max_value()),
            _ => None,
        }
    }

    pub fn call<R: Rng>(func_name: &str, args: &[f64], rng: &mut R) -> Result<f64> {
        let arity = match Function::arity(func_name) {
            Some(arity) => arity,
            None => return Err(error!(UnsupportedFunction; func_name)),
        };
        if !arity.contains(&args.len()) {
            return Err(error!(IllegalFunctionCall; &format!(
                "{} TAKES {} ARGUMENT, GOT {}",
                func_name,
                arity.start(),
                args.len()
            )));
        }
        match func_name {
            "ABS" => Ok(args[0].abs()),
            "COS" => Ok(args[0].to_radians().cos()),
            "EXP" => Ok(args[0].exp()),
            "LOG" => Ok(args[0].ln()),
            "RND" => Ok(Function::rnd(rng)),
            "SIN" => Ok(args[0].to_radians().sin()),
            "SQR" => Ok(args[0].sqrt()),
            "TAN" => Ok(args[0].to_radians().tan()),
            _ => Err(error!(UnsupportedFunction; func_name)),
        }
    }

    /// Uniform in [0, 1). Any arguments were already ignored.
    pub fn rnd<R: Rng>(rng: &mut R) -> f64 {
        rng.gen::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn call(name: &str, args: &[f64]) -> Result<f64> {
        let mut rng = StdRng::seed_from_u64(64);
        Function::call(name, args, &mut rng)
    }

    #[test]
    fn test_degrees() {
        assert!((call("SIN", &[30.0]).unwrap() - 0.5).abs() < 1e-12);
        assert!((call("COS", &[60.0]).unwrap() - 0.5).abs() < 1e-12);
        assert!((call("TAN", &[45.0]).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_math() {
        assert_eq!(call("ABS", &[-9.0]), Ok(9.0));
        assert_eq!(call("SQR", &[16.0]), Ok(4.0));
        assert_eq!(call("EXP", &[0.0]), Ok(1.0));
        assert_eq!(call("LOG", &[1.0]), Ok(0.0));
    }

    #[test]
    fn test_rnd_ignores_arguments() {
        let r = call("RND", &[]).unwrap();
        assert!((0.0..1.0).contains(&r));
        let r = call("RND", &[42.0, 7.0]).unwrap();
        assert!((0.0..1.0).contains(&r));
    }

    #[test]
    fn test_errors() {
        assert_eq!(call("FOO", &[1.0]).unwrap_err().code(), 25);
        assert_eq!(call("SIN", &[]).unwrap_err().code(), 26);
        assert_eq!(call("SIN", &[1.0, 2.0]).unwrap_err().code(), 26);
    }
}
