// src/entropy/mod.rs

//! Shannon entropy of classical distributions and von Neumann entropy of
//! ensembles of single qubits.

use crate::core::{EntropyError, TOLERANCE};
use crate::linalg::{eigen, vector, ComplexMatrix};
use num_complex::Complex64;
use std::collections::HashSet;

const SUM_TOLERANCE: f64 = 1e-9;

/// One outcome of a classical probability distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolProbability {
    pub symbol: String,
    pub probability: f64,
}

impl SymbolProbability {
    pub fn new(symbol: impl Into<String>, probability: f64) -> Self {
        Self { symbol: symbol.into(), probability }
    }
}

/// One qubit of a quantum ensemble, emitted with `probability`.
#[derive(Debug, Clone, PartialEq)]
pub struct QubitProbability {
    pub symbol: String,
    pub qubit: [Complex64; 2],
    pub probability: f64,
}

impl QubitProbability {
    pub fn new(symbol: impl Into<String>, qubit: [Complex64; 2], probability: f64) -> Self {
        Self { symbol: symbol.into(), qubit, probability }
    }
}

fn check_distribution<'a>(
    entries: impl Iterator<Item = (&'a str, f64)>,
) -> Result<(), EntropyError> {
    let mut seen = HashSet::new();
    let mut total = 0.0;
    for (symbol, probability) in entries {
        if !seen.insert(symbol) {
            return Err(EntropyError::RepeatedSymbol(symbol.to_string()));
        }
        total += probability;
    }
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(EntropyError::ProbabilitiesDoNotSumToOne(total));
    }
    Ok(())
}

/// `H = Σ -p log₂ p`, with `0 log 0 = 0`.
///
/// # Errors
/// `ProbabilitiesDoNotSumToOne` or `RepeatedSymbol` for an invalid distribution.
pub fn shannon_entropy(pdf: &[SymbolProbability]) -> Result<f64, EntropyError> {
    check_distribution(pdf.iter().map(|x| (x.symbol.as_str(), x.probability)))?;
    Ok(pdf
        .iter()
        .filter(|x| x.probability > 0.0)
        .map(|x| -x.probability * x.probability.log2())
        .sum())
}

fn check_ensemble(pdf: &[QubitProbability]) -> Result<(), EntropyError> {
    check_distribution(pdf.iter().map(|x| (x.symbol.as_str(), x.probability)))?;
    if let Some(x) = pdf.iter().find(|x| (vector::norm(&x.qubit) - 1.0).abs() > SUM_TOLERANCE) {
        return Err(EntropyError::QubitNotNormalized(x.symbol.clone()));
    }
    Ok(())
}

/// Density operator `ρ = Σ p |ψ><ψ|` of a single-qubit ensemble.
pub fn density_operator(pdf: &[QubitProbability]) -> Result<ComplexMatrix, EntropyError> {
    check_ensemble(pdf)?;
    let mut rho = ComplexMatrix::zeros(2, 2)?;
    for x in pdf {
        let ket = ComplexMatrix::new(vec![vec![x.qubit[0]], vec![x.qubit[1]]])?;
        let projector = ket.multiply(&ket.adjoint())?;
        rho = rho.add(&projector.scale(Complex64::new(x.probability, 0.0)))?;
    }
    Ok(rho)
}

/// Shannon entropy of the eigenvalues of the ensemble's density operator.
pub fn von_neumann_entropy(pdf: &[QubitProbability]) -> Result<f64, EntropyError> {
    let rho = density_operator(pdf)?;
    let eigenvalues = eigen::eigenvalues(&rho)?;
    // ρ is hermitian and positive, so the imaginary parts and any negative
    // rounding residue are noise.
    let spectrum: Vec<SymbolProbability> = eigenvalues
        .iter()
        .enumerate()
        .map(|(i, lambda)| {
            let p = if lambda.re.abs() < TOLERANCE { 0.0 } else { lambda.re };
            SymbolProbability::new(format!("λ{i}"), p)
        })
        .collect();
    shannon_entropy(&spectrum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FRAC_1_SQRT_2;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn shannon_of_uniform_and_certain() {
        let uniform: Vec<_> = ["a", "b", "c", "d"].iter().map(|s| SymbolProbability::new(*s, 0.25)).collect();
        assert!((shannon_entropy(&uniform).unwrap() - 2.0).abs() < 1e-12);

        let certain = [SymbolProbability::new("a", 1.0), SymbolProbability::new("b", 0.0)];
        assert_eq!(shannon_entropy(&certain).unwrap(), 0.0);
    }

    #[test]
    fn shannon_rejects_invalid_distributions() {
        let short = [SymbolProbability::new("a", 0.5)];
        assert!(matches!(shannon_entropy(&short), Err(EntropyError::ProbabilitiesDoNotSumToOne(_))));

        let repeated = [SymbolProbability::new("a", 0.5), SymbolProbability::new("a", 0.5)];
        assert_eq!(shannon_entropy(&repeated), Err(EntropyError::RepeatedSymbol("a".to_string())));
    }

    #[test]
    fn pure_state_has_zero_von_neumann_entropy() {
        let pdf = [QubitProbability::new("0", [c(1.0, 0.0), c(0.0, 0.0)], 1.0)];
        assert!(von_neumann_entropy(&pdf).unwrap().abs() < 1e-9);
    }

    #[test]
    fn maximally_mixed_state_has_one_bit() {
        let pdf = [
            QubitProbability::new("0", [c(1.0, 0.0), c(0.0, 0.0)], 0.5),
            QubitProbability::new("1", [c(0.0, 0.0), c(1.0, 0.0)], 0.5),
        ];
        assert!((von_neumann_entropy(&pdf).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_orthogonal_ensemble_is_below_shannon() {
        let pdf = [
            QubitProbability::new("0", [c(1.0, 0.0), c(0.0, 0.0)], 0.5),
            QubitProbability::new("+", [c(FRAC_1_SQRT_2, 0.0), c(FRAC_1_SQRT_2, 0.0)], 0.5),
        ];
        let s = von_neumann_entropy(&pdf).unwrap();
        assert!(s > 0.0 && s < 1.0);
        let rho = density_operator(&pdf).unwrap();
        assert!(rho.is_hermitian());
        assert!((rho.get(0, 0).re - 0.75).abs() < 1e-12);
    }

    #[test]
    fn unnormalized_qubit_is_rejected() {
        let pdf = [QubitProbability::new("x", [c(1.0, 0.0), c(1.0, 0.0)], 1.0)];
        assert_eq!(von_neumann_entropy(&pdf), Err(EntropyError::QubitNotNormalized("x".to_string())));
    }
}
