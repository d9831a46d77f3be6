use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Element, MouseEvent, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::surface::RenderSurface;
use crate::config::{LineFieldConfig, Tier};
use crate::error::{Result, ThreadsError};
use crate::frame::{normalize_pointer, FrameLoop, FrameState};
use crate::shaders;
use crate::shading::effective_pointer;

/// GL program drawing the line field as one full-screen triangle.
pub struct LineFieldRenderer {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    _vbo: WebGlBuffer,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
}

impl LineFieldRenderer {
    pub fn new(gl: GL, config: &LineFieldConfig, line_count: usize) -> Result<Self> {
        let program = link_program(&gl, shaders::VERTEX, &shaders::fragment(line_count))?;

        let vao = gl
            .create_vertex_array()
            .ok_or(ThreadsError::Resource("vertex array"))?;
        let vbo = gl.create_buffer().ok_or(ThreadsError::Resource("buffer"))?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
        let vertices = js_sys::Float32Array::from(&shaders::FULLSCREEN_TRIANGLE[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        let position = gl.get_attrib_location(&program, "position");
        if position < 0 {
            return Err(ThreadsError::MissingAttribute("position"));
        }
        gl.enable_vertex_attrib_array(position as u32);
        gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
        gl.bind_vertex_array(None);
        gl.bind_buffer(GL::ARRAY_BUFFER, None);

        // Static uniforms stay bound to the program.
        gl.use_program(Some(&program));
        let c = config.color;
        gl.uniform3f(gl.get_uniform_location(&program, "uColor").as_ref(), c.r, c.g, c.b);
        gl.uniform1f(
            gl.get_uniform_location(&program, "uAmplitude").as_ref(),
            config.amplitude,
        );
        gl.uniform1f(
            gl.get_uniform_location(&program, "uDistance").as_ref(),
            config.distance,
        );

        // Output is premultiplied.
        gl.enable(GL::BLEND);
        gl.blend_func(GL::ONE, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            time: gl.get_uniform_location(&program, "iTime"),
            resolution: gl.get_uniform_location(&program, "iResolution"),
            mouse: gl.get_uniform_location(&program, "uMouse"),
            gl,
            program,
            vao,
            _vbo: vbo,
        })
    }

    pub fn draw(&self, frame: &FrameState, config: &LineFieldConfig) {
        let gl = &self.gl;
        let res = frame.resolution;
        let [mx, my] = effective_pointer(config, frame);

        gl.viewport(0, 0, res.width as i32, res.height as i32);
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.uniform1f(self.time.as_ref(), frame.time);
        let [w, h, aspect] = res.as_array();
        gl.uniform3f(self.resolution.as_ref(), w, h, aspect);
        gl.uniform2f(self.mouse.as_ref(), mx, my);
        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 3);
        gl.bind_vertex_array(None);
    }
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader> {
    let shader = gl.create_shader(kind).ok_or(ThreadsError::Resource("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(ThreadsError::ShaderCompile(log))
    }
}

fn link_program(gl: &GL, vert_src: &str, frag_src: &str) -> Result<WebGlProgram> {
    let vert = compile_shader(gl, GL::VERTEX_SHADER, vert_src)?;
    let frag = compile_shader(gl, GL::FRAGMENT_SHADER, frag_src)?;
    let program = gl.create_program().ok_or(ThreadsError::Resource("program"))?;
    gl.attach_shader(&program, &vert);
    gl.attach_shader(&program, &frag);
    gl.link_program(&program);
    // Shaders are no longer needed once linked.
    gl.delete_shader(Some(&vert));
    gl.delete_shader(Some(&frag));

    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(ThreadsError::ProgramLink(log))
    }
}

/// Attach the background to `container` and start the render loop.
pub fn start(container: Element, config: LineFieldConfig, tier: Tier) -> Result<()> {
    let win = window().ok_or(ThreadsError::MissingGlobal("window"))?;
    let document = win.document().ok_or(ThreadsError::MissingGlobal("document"))?;

    let dpr = tier.device_pixel_ratio(win.device_pixel_ratio());
    let surface = RenderSurface::attach(&document, &container, dpr)?;
    let (w, h) = surface.fit(&container);
    let renderer = LineFieldRenderer::new(surface.context()?, &config, tier.line_count())?;
    let frames = Rc::new(RefCell::new(FrameLoop::new(config, tier)));
    frames.borrow_mut().resize(w as f32, h as f32);
    log::info!("threads background: {} lines, {:?} tier", tier.line_count(), tier);

    // Resize drawing buffer with the container
    let resize_closure = {
        let container = container.clone();
        let frames = frames.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = surface.fit(&container);
            frames.borrow_mut().resize(w as f32, h as f32);
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    if config.enable_mouse_interaction {
        subscribe_pointer(&win, &container, &frames)?;
    }

    // Animation loop
    // `f` holds the animation-frame closure so it can re-request itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        {
            let mut frames = frames.borrow_mut();
            let config = *frames.config();
            if let Some(state) = frames.tick(timestamp) {
                renderer.draw(state, &config);
            }
        }

        // schedule next
        let Some(win) = window() else { return };
        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    Ok(())
}

fn subscribe_pointer(
    win: &web_sys::Window,
    container: &Element,
    frames: &Rc<RefCell<FrameLoop>>,
) -> Result<()> {
    // Listen on the window: the canvas sits under the hero content.
    let on_move = {
        let container = container.clone();
        let frames = frames.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let rect = container.get_bounding_client_rect();
            let client = (f64::from(event.client_x()), f64::from(event.client_y()));
            let mut frames = frames.borrow_mut();
            match normalize_pointer(client, rect.left(), rect.top(), rect.width(), rect.height()) {
                Some(p) => frames.pointer_moved(p),
                None => frames.pointer_left(),
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    win.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let on_out = {
        let frames = frames.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            // No related target: the pointer left the window.
            if event.related_target().is_none() {
                frames.borrow_mut().pointer_left();
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    win.add_event_listener_with_callback("mouseout", on_out.as_ref().unchecked_ref())?;
    on_out.forget();

    Ok(())
}
