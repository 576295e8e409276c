use crate::cli::PaintArgs;

pub fn run(args: &PaintArgs) {
    println!("{}", args.color.paint(&args.text.join(" ")));
}
