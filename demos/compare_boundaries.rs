extern crate cubic_spline_interpolation;

use cubic_spline_interpolation::{BoundaryCondition, FunctionFamily, SplineRequest};

fn main() {
    env_logger::init();

    let epsilon = 0.05;
    let sample_points = 50;

    println!("function;condition;max_error");
    for family in FunctionFamily::ALL {
        let request = SplineRequest::new(family.name(), epsilon, sample_points, BoundaryCondition::ALL.to_vec());
        let response = request.run().unwrap();

        for fit in response.fits {
            println!("{};{:?};{:e}", family.name(), fit.condition, fit.max_error);
        }
    }
}
