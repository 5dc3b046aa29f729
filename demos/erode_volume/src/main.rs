use argh::FromArgs;

use voxmorph::{
    binding::{erode06_with, BorderFill, ErodeOptions, HostArray},
    morphology::ExecutionStrategy,
    volume::{Volume, VolumeSize},
};

#[derive(FromArgs)]
/// Erode a voxelised sphere with the 6-connected structuring element
struct Args {
    /// number of voxels along each axis (default: 32)
    #[argh(option, short = 'n', default = "32")]
    size: usize,

    /// sphere radius in voxels (default: 12.0)
    #[argh(option, short = 'r', default = "12.0")]
    radius: f64,

    /// number of erosion passes (default: 3)
    #[argh(option, short = 'p', default = "3")]
    passes: usize,

    /// number of worker threads, 0 for the global pool (default: 0)
    #[argh(option, short = 't', default = "0")]
    threads: usize,

    /// copy the input border into the output instead of clearing it
    #[argh(switch)]
    copy_border: bool,
}

fn sphere(size: VolumeSize, radius: f64) -> Result<Volume<bool>, Box<dyn std::error::Error>> {
    let centre = [size.nx, size.ny, size.nz].map(|n| (n as f64 - 1.0) / 2.0);
    let data = (0..size.num_voxels())
        .map(|v| {
            let [x, y, z] = size.coords(v);
            let d2 = (x as f64 - centre[0]).powi(2)
                + (y as f64 - centre[1]).powi(2)
                + (z as f64 - centre[2]).powi(2);
            d2 <= radius * radius
        })
        .collect();
    Ok(Volume::new(size, data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let size = VolumeSize {
        nx: args.size,
        ny: args.size,
        nz: args.size,
    };

    let options = ErodeOptions {
        border: if args.copy_border {
            BorderFill::CopyInput
        } else {
            BorderFill::False
        },
        strategy: match args.threads {
            0 => ExecutionStrategy::ParallelSlices,
            1 => ExecutionStrategy::Serial,
            n => ExecutionStrategy::Fixed(n),
        },
    };

    let volume = sphere(size, args.radius)?;
    log::info!("sphere of radius {} in {size}", args.radius);
    println!("pass 0: {} voxels set", volume.count_true());

    let mut current = HostArray::from(volume);
    for pass in 1..=args.passes {
        current = erode06_with(std::slice::from_ref(&current), &options)?;
        let count = current
            .as_logical()
            .map(|data| data.iter().filter(|&&b| b).count())
            .unwrap_or_default();
        println!("pass {pass}: {count} voxels set");
    }

    Ok(())
}
