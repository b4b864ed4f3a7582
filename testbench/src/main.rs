use exprtree::{Environment, Error, deftree};

fn main() -> Result<(), Error> {
    let mut env = Environment::new();
    env.set("Xray", 1.0);
    env.set("Yellow", 2.0);
    env.set("Zebra", 3.0);

    let tree = deftree!(+ (* 2.3 Xray) (* Yellow (- Zebra Xray)))?;
    println!("\n{}", tree);
    println!(" Evaluates to: {}\n", tree.eval(&env)?);

    let deriv = tree.symbolic_deriv("Xray");
    println!("{}", deriv);
    println!("Evaluates to: {}\n", deriv.eval(&env)?);
    Ok(())
}
