// ── Line field shaders (GLSL ES 3.00, WebGL2) ───────────────────────

use crate::shading::{LINE_BLUR_PX, LINE_WIDTH_PX};

/// Full-screen triangle in clip space, two floats per vertex.
#[rustfmt::skip]
pub const FULLSCREEN_TRIANGLE: [f32; 6] = [
    -1.0, -1.0,
     3.0, -1.0,
    -1.0,  3.0,
];

pub const VERTEX: &str = r#"#version 300 es

in vec2 position;

void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

const FRAGMENT_BODY: &str = r#"
float Perlin2D(vec2 P) {
    vec2 Pi = floor(P);
    vec4 Pf_Pfmin1 = P.xyxy - vec4(Pi, Pi + 1.0);
    vec4 Pt = vec4(Pi.xy, Pi.xy + 1.0);
    Pt = Pt - floor(Pt * (1.0 / 71.0)) * 71.0;
    Pt += vec2(26.0, 161.0).xyxy;
    Pt *= Pt;
    Pt = Pt.xzxz * Pt.yyww;
    vec4 hash_x = fract(Pt * (1.0 / 951.135664));
    vec4 hash_y = fract(Pt * (1.0 / 642.949883));
    vec4 grad_x = hash_x - 0.49999;
    vec4 grad_y = hash_y - 0.49999;
    vec4 grad_results = inversesqrt(grad_x * grad_x + grad_y * grad_y)
        * (grad_x * Pf_Pfmin1.xzxz + grad_y * Pf_Pfmin1.yyww);
    grad_results *= 1.4142135623730950;
    vec2 blend = Pf_Pfmin1.xy * Pf_Pfmin1.xy * Pf_Pfmin1.xy
               * (Pf_Pfmin1.xy * (Pf_Pfmin1.xy * 6.0 - 15.0) + 10.0);
    vec4 blend2 = vec4(blend, vec2(1.0 - blend));
    return dot(grad_results, blend2.zxzx * blend2.wwyy);
}

float pixel(float count, vec2 resolution) {
    return (1.0 / max(resolution.x, resolution.y)) * count;
}

float lineFn(vec2 st, float width, float perc) {
    float split_point = 0.1 + perc * 0.4;

    float amplitude_normal = smoothstep(split_point, 0.7, st.x);
    float final_amplitude = amplitude_normal * 0.5 * uAmplitude
                            * (1.0 + (uMouse.y - 0.5) * 0.2);

    float time_scaled = iTime / 10.0 + (uMouse.x - 0.5);
    float blur = smoothstep(split_point, split_point + 0.05, st.x) * perc;

    float xnoise = mix(
        Perlin2D(vec2(time_scaled, st.x + perc) * 2.5),
        Perlin2D(vec2(time_scaled, st.x + time_scaled) * 3.5) / 1.5,
        st.x * 0.3
    );

    float y = 0.5 + (perc - 0.5) * uDistance + xnoise / 2.0 * final_amplitude;
    float feather = LINE_BLUR * pixel(1.0, iResolution.xy) * blur;

    float line_start = smoothstep(y + width / 2.0 + feather, y, st.y);
    float line_end = smoothstep(y, y - width / 2.0 - feather, st.y);

    return clamp(
        (line_start - line_end) * (1.0 - smoothstep(0.0, 1.0, pow(perc, 0.3))),
        0.0,
        1.0
    );
}

void main() {
    vec2 uv = gl_FragCoord.xy / iResolution.xy;

    float uncovered = 1.0;
    for (int i = 0; i < LINE_COUNT; i++) {
        float p = float(i) / float(LINE_COUNT);
        float width = LINE_WIDTH * pixel(1.0, iResolution.xy) * (1.0 - p);
        uncovered *= 1.0 - lineFn(uv, width, p);
    }

    float coverage = 1.0 - uncovered;
    fragColor = vec4(uColor * coverage, coverage);
}
"#;

/// Fragment shader with the line count baked in as a loop bound.
pub fn fragment(line_count: usize) -> String {
    format!(
        "#version 300 es
precision highp float;

uniform float iTime;
uniform vec3 iResolution;
uniform vec3 uColor;
uniform float uAmplitude;
uniform float uDistance;
uniform vec2 uMouse;

out vec4 fragColor;

const int LINE_COUNT = {line_count};
const float LINE_WIDTH = {LINE_WIDTH_PX:.1};
const float LINE_BLUR = {LINE_BLUR_PX:.1};
{FRAGMENT_BODY}"
    )
}
