#![no_main]

// Feeds arbitrary accessor metadata and buffers to the normalizer. It must never panic,
// and a second run over integer weights must find nothing left to do.

use libfuzzer_sys::{arbitrary, fuzz_target};
use skin_weight_normalize::{
    normalize_weights, Accessor, Buffer, BufferView, DocumentTables, Mesh, NormalizeSettings,
    Primitive, DEFAULT_WEIGHT_ATTRIBUTE, SHAPE_VEC4,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct WeightsInput {
    pub component_type: ComponentType,
    pub accessor_offset: Option<u8>,
    pub view_offset: Option<u8>,
    pub view_length: u16,
    pub view_stride: Option<u8>,
    pub declared_length: u16,
    pub skip_reweight: bool,
    pub skip_overkill: bool,
    pub buffer: Vec<u8>,
}

#[derive(Clone, Copy, Debug, arbitrary::Arbitrary)]
pub enum ComponentType {
    Float,
    UnsignedByte,
    UnsignedShort,
    Other(u32),
}

impl ComponentType {
    fn code(self) -> u32 {
        match self {
            Self::Float => 5126,
            Self::UnsignedByte => 5121,
            Self::UnsignedShort => 5123,
            Self::Other(code) => code,
        }
    }
}

fuzz_target!(|input: WeightsInput| {
    let tables = DocumentTables {
        meshes: vec![Mesh {
            primitives: vec![Primitive {
                attributes: [(DEFAULT_WEIGHT_ATTRIBUTE.to_string(), 0)].into_iter().collect(),
            }],
        }],
        accessors: vec![Accessor {
            buffer_view: Some(0),
            byte_offset: input.accessor_offset.map(usize::from),
            component_type: input.component_type.code(),
            kind: SHAPE_VEC4.to_string(),
        }],
        buffer_views: vec![BufferView {
            buffer: 0,
            byte_offset: input.view_offset.map(usize::from),
            byte_length: usize::from(input.view_length),
            byte_stride: input.view_stride.map(usize::from),
        }],
        buffers: vec![Buffer {
            byte_length: usize::from(input.declared_length),
        }],
    };
    let Ok(settings) = NormalizeSettings::builder()
        .skip_reweight(input.skip_reweight)
        .skip_overkill(input.skip_overkill)
        .build()
    else {
        return;
    };

    let mut buffer = input.buffer.clone();
    let attributes = [DEFAULT_WEIGHT_ATTRIBUTE];
    normalize_weights(&tables, &mut buffer, &attributes, &settings);

    let is_integer = matches!(
        input.component_type,
        ComponentType::UnsignedByte | ComponentType::UnsignedShort
    );
    if is_integer && !input.skip_overkill {
        let once = buffer.clone();
        let second = normalize_weights(&tables, &mut buffer, &attributes, &settings);
        assert!(second.did_nothing(), "second run changed weights: {second}");
        assert_eq!(buffer, once);
    }
});
