use ndarray as nd;
use boundstate::{ hamiltonian::Hamiltonian, potential::HarmonicOscillator };

// solve for eigenstates of the quantum harmonic oscillator and compare the
// lowest levels against (n + 1/2) ħω

fn main() {
    const TARGET_N: usize = 8; // number of levels to print

    // natural units: ħ = 1, m = 1, ω = 1, so Eₙ = n + 1/2
    let ho = HarmonicOscillator::new(1.0, 1.0, 0.0)
        .expect("valid oscillator parameters");
    let x: nd::Array1<f64> = nd::Array1::linspace(-8.0, 8.0, 801);
    let ham = Hamiltonian::new(&ho, x).expect("valid grid");
    let spec = ham.solve().expect("eigensolve");

    println!("  n   computed     expected");
    for n in 0..TARGET_N {
        let expected = 0.5 + n as f64;
        println!("{n:>3}   {:.6}     {expected:.6}", spec.energies[n]);
    }
}
