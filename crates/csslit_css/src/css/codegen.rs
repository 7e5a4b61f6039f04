use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig},
    CodeGenerator, CodegenConfig, Emit,
};

pub struct StringifyOptions {
    pub minify: bool,
    pub basic_css_writer: BasicCssWriterConfig,
}

// `BasicCssWriterConfig` does not implement `Clone` in this version of
// `swc_css_codegen`, but all of its fields are `Copy`.
fn copy_writer_config(config: &BasicCssWriterConfig) -> BasicCssWriterConfig {
    BasicCssWriterConfig {
        indent_type: config.indent_type,
        indent_width: config.indent_width,
        linefeed: config.linefeed,
    }
}

impl Clone for StringifyOptions {
    fn clone(&self) -> Self {
        Self {
            minify: self.minify,
            basic_css_writer: copy_writer_config(&self.basic_css_writer),
        }
    }
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            minify: true,
            basic_css_writer: Default::default(),
        }
    }
}

/// Stringifies the [`Stylesheet`]
pub fn stringify(node: &Stylesheet, options: &StringifyOptions) -> String {
    let mut buf = String::new();
    let writer = BasicCssWriter::new(&mut buf, None, copy_writer_config(&options.basic_css_writer));
    let mut codegen = CodeGenerator::new(
        writer,
        CodegenConfig {
            minify: options.minify,
        },
    );
    let _ = codegen.emit(&node);

    buf
}
