use crate::error::CliError;
use crate::util::args::parse_zero_replacement;
use argh::FromArgs;
use skin_weight_normalize::{
    normalize_container, NormalizeSettings, NumericEncoding, RunStats, COMPONENTS,
    DEFAULT_WEIGHT_ATTRIBUTE, DEFAULT_ZERO_REPLACEMENT,
};
use skin_weight_normalize_gltf::GltfDocument;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Repair the skin weights of a glTF or GLB file, so every weight vector sums to full scale
pub struct NormalizeCmd {
    /// glTF or GLB file to read
    #[argh(positional, arg_name = "input-path")]
    pub input_path: PathBuf,

    /// where to write the result, may be the input itself
    #[argh(positional, arg_name = "output-path")]
    pub output_path: PathBuf,

    /// attribute to normalize, can be passed multiple times [default: WEIGHTS_0]
    #[argh(option)]
    pub attr: Vec<String>,

    /// vector written over all-zero weights, four numbers between 0 and 1 [default: 1,0,0,0]
    #[argh(
        option,
        default = "DEFAULT_ZERO_REPLACEMENT",
        from_str_fn(parse_zero_replacement)
    )]
    pub zero_replacement: [f32; COMPONENTS],

    /// only replace all-zero weight vectors, leave every other vector alone
    #[argh(switch)]
    pub no_reweight: bool,

    /// don't let the largest weight absorb rounding error when reweighting
    #[argh(switch)]
    pub no_reweight_overkill: bool,

    /// deadzone for float weights [default: 0.0009765625]
    #[argh(option)]
    pub float_good_enough: Option<f64>,

    /// deadzone for unsigned short weights [default: 4]
    #[argh(option)]
    pub short_good_enough: Option<f64>,

    /// deadzone for unsigned byte weights [default: 4]
    #[argh(option)]
    pub byte_good_enough: Option<f64>,

    /// process the file but don't write the result
    #[argh(switch)]
    pub dry_run: bool,

    /// print a line for every accessor and every changed weight vector
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl NormalizeCmd {
    /// Maps the command line flags onto validated settings.
    fn settings(&self) -> Result<NormalizeSettings, CliError> {
        let mut builder = NormalizeSettings::builder()
            .zero_replacement(self.zero_replacement)
            .skip_reweight(self.no_reweight)
            .skip_overkill(self.no_reweight_overkill);

        for (encoding, epsilon) in [
            (NumericEncoding::Float32, self.float_good_enough),
            (NumericEncoding::UInt16, self.short_good_enough),
            (NumericEncoding::UInt8, self.byte_good_enough),
        ] {
            if let Some(epsilon) = epsilon {
                builder = builder.epsilon(encoding, epsilon);
            }
        }

        Ok(builder.build()?)
    }

    /// The requested attribute names, or the default weight attribute if none were given.
    fn attributes(&self) -> Vec<String> {
        if self.attr.is_empty() {
            vec![DEFAULT_WEIGHT_ATTRIBUTE.to_string()]
        } else {
            self.attr.clone()
        }
    }
}

pub fn handle_normalize_command(cmd: NormalizeCmd) -> Result<RunStats, CliError> {
    let settings = cmd.settings()?;
    let attributes = cmd.attributes();

    let mut document = GltfDocument::load(&cmd.input_path)?;
    let stats = normalize_container(&mut document, &attributes, &settings);
    println!("{stats}");

    if cmd.dry_run {
        println!("Dry run, not writing {}", cmd.output_path.display());
    } else {
        document.save(&cmd.output_path)?;
    }

    Ok(stats)
}
