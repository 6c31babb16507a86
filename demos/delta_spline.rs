extern crate cubic_spline_interpolation;

use cubic_spline_interpolation::{BoundaryCondition, FunctionFamily, FunctionSpec, Spline};

fn main() {
    env_logger::init();

    let spec = FunctionSpec::new(FunctionFamily::Delta, 0.1);
    let f = spec.evaluator();
    let spline = Spline::from_function(&f, 11, spec.boundary(BoundaryCondition::Natural)).unwrap();

    let number_of_steps = 60;
    let step = 1.0 / number_of_steps as f64;

    println!("x;f;S");
    for i in 0..=number_of_steps {
        let x = step * i as f64;
        println!("{:.3};{:.5};{:.5}", x, f(x), spline.evaluate(x));
    }
}
