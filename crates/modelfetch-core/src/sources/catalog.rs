//! Built-in asset catalog, used as the default `[sources]` config section.
//!
//! Once written to `config.toml` the list is plain data and can be edited
//! there. Duplicates are kept on purpose so the default config reproduces
//! the catalog the viewer was built against.

/// Google model-viewer, three.js and Babylon.js sample assets.
pub const EXPLICIT_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/Astronaut.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/Canoe.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/Chair.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/Horse.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/NeilArmstrong.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/RobotExpressive.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/RocketShip.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/Shishkebab.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/odd-shape-labeled.glb",
    "https://raw.githubusercontent.com/google/model-viewer/master/packages/shared-assets/models/shishkebab.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/Soldier.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/Flamingo.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/Parrot.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/Stork.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/PrimaryIonDrive.glb",
    "https://raw.githubusercontent.com/mrdoob/three.js/master/examples/models/gltf/LittlestTokyo.glb",
    "https://raw.githubusercontent.com/BabylonJS/Assets/master/meshes/ufo.glb",
    "https://raw.githubusercontent.com/BabylonJS/Assets/master/meshes/shark.glb",
    "https://raw.githubusercontent.com/BabylonJS/Assets/master/meshes/seagulf.glb",
    "https://raw.githubusercontent.com/BabylonJS/Assets/master/meshes/vintageFan_animated.glb",
];

/// Khronos glTF-Sample-Assets layout: `Models/{name}/glTF-Binary/{name}.glb`.
pub const KHRONOS_TEMPLATE: &str =
    "https://raw.githubusercontent.com/KhronosGroup/glTF-Sample-Assets/main/Models/{name}/glTF-Binary/{name}.glb";

pub const KHRONOS_NAMES: &[&str] = &[
    "AlphaBlendModeTest",
    "AnimatedMorphCube",
    "AntiqueCamera",
    "AttenuationTest",
    "Avocado",
    "BarramundiFish",
    "BoomBox",
    "Box",
    "BoxInterleaved",
    "BoxTextured",
    "BoxVertexColors",
    "Buggy",
    "CesiumMan",
    "CesiumMilkTruck",
    "ClearcoatTest",
    "Corset",
    "DamagedHelmet",
    "DragonAttenuation",
    "Duck",
    "EmissiveStrengthTest",
    "EnvironmentTest",
    "FlightHelmet",
    "Fox",
    "GearboxAssy",
    "GlamVelvetSofa",
    "InterpolationTest",
    "IridescenceDielectricSpheres",
    "IridescenceLamp",
    "IridescenceSuzanne",
    "Lantern",
    "MaterialsVariantsShoe",
    "MetalRoughSpheres",
    "MorphPrimitivesTest",
    "MosquitoInAmber",
    "MultiUVTest",
    "NormalTangentMirrorTest",
    "NormalTangentTest",
    "OrientationTest",
    "ReciprocatingSaw",
    "RecursiveSkeletons",
    "RiggedFigure",
    "RiggedSimple",
    "SciFiHelmet",
    "SheenChair",
    "SheenCloth",
    "SimpleMeshes",
    "SimpleMorph",
    "SimpleSkin",
    "SimpleSparseness",
    "SpecGlossVsMetalRough",
    "StainedGlassLamp",
    "Suzanne",
    "TextureCoordinateTest",
    "TextureLinearInterpolationTest",
    "TextureSettingsTest",
    "TextureTransformTest",
    "ToyCar",
    "TransmissionRoughnessTest",
    "TransmissionTest",
    "Triangle",
    "TriangleWithoutIndices",
    "TwoSidedPlane",
    "UnicodeHeart",
    "UnlitTest",
    "VertexColorTest",
    "WaterBottle",
    "AnisotropyBarnLamp",
    "AnisotropyDisc",
    "Camera_01_4k",
    "ClothFolds",
    "DamagedHelmet",
    "DigitalHand",
    "DragonAttenuation",
];
