//! Curated vocabulary for asset relevance scoring.

/// Function words stripped from queries before matching.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "of", "on", "in", "to", "with", "for", "at", "by",
    "from", "as", "is", "it", "this", "that", "these", "those", "be", "are", "was", "were",
    "am", "has", "have", "had", "will", "would", "can", "could", "shall", "should", "do",
    "does", "did",
];

/// Search keywords associated with an asset category, or `None` for
/// unmapped categories (which simply score 0 on the type component).
///
/// All entries are lowercase; queries are lowercased before lookup.
pub(crate) fn keywords_for(kind: &str) -> Option<&'static [&'static str]> {
    let keywords: &[&str] = match kind {
        "AnimationClip" => &[
            "animation", "clip", "animator", "anim", "animating", "motion", "keyframe",
            "timeline", "sequence", "movement",
        ],
        "Texture2D" => &[
            "texture", "image", "sprite", "bitmap", "png", "jpg", "jpeg", "tga", "psd",
            "picture", "graphic",
        ],
        "Material" => &[
            "material", "shader", "surface", "texture", "rendering", "appearance", "mat",
        ],
        "Mesh" => &[
            "mesh", "model", "3d", "geometry", "vertices", "polygons", "triangles", "object",
        ],
        "Prefab" => &[
            "prefab", "template", "asset", "object", "reusable", "instance", "component",
        ],
        "AudioClip" => &[
            "audio", "sound", "clip", "music", "sfx", "wav", "mp3", "ogg", "soundtrack",
            "voice",
        ],
        "Script" => &[
            "script", "code", "csharp", "cs", "behavior", "component", "programming", "logic",
        ],
        "Scene" => &[
            "scene", "level", "environment", "world", "stage", "setup", "layout",
        ],
        "Shader" => &[
            "shader", "graphics", "rendering", "effect", "visual", "glsl", "hlsl", "compute",
        ],
        "Font" => &[
            "font", "text", "typeface", "typography", "ttf", "otf", "characters",
        ],
        "Sprite" => &[
            "sprite", "2d", "image", "graphic", "icon", "character", "ui",
        ],
        "Terrain" => &[
            "terrain", "landscape", "heightmap", "ground", "environment", "topography",
        ],
        "ParticleSystem" => &[
            "particle", "effect", "vfx", "emission", "simulation", "fx",
        ],
        "Lighting" => &[
            "light", "illumination", "shadow", "bake", "global illumination", "gi", "lightmap",
        ],
        "NavMesh" => &["navigation", "pathfinding", "ai", "movement", "obstacle"],
        "AnimatorController" => &[
            "animator", "state machine", "transition", "parameter", "blend tree",
        ],
        "ScriptableObject" => &["scriptable object", "data container", "asset", "custom"],
        "PhysicsMaterial" => &["physics", "friction", "bounce", "material", "collision"],
        "RenderTexture" => &[
            "render texture", "rt", "dynamic texture", "camera output", "render target",
        ],
        "Timeline" => &[
            "timeline", "sequence", "cutscene", "animation", "time-based",
        ],
        _ => return None,
    };

    Some(keywords)
}
