use clap::ValueEnum;

const HELLO_WORLD_BODY: &str = "#include <iostream>

int main() {
  std::cout << \"Hello, World!\" << std::endl;
  return 0;
}
";

const MAIN_BODY: &str = "int main(const int argc, char** argv) {
  return 0;
}
";

/// Built-in source file templates. Names are matched case-sensitively,
/// either the long name or the short alias.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    #[default]
    #[value(name = "CPPHelloWorld", alias = "cpphw")]
    HelloWorld,

    #[value(name = "CPPMain", alias = "cppm")]
    Main,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::HelloWorld, TemplateKind::Main];

    pub fn from_name(name: &str) -> Option<TemplateKind> {
        <TemplateKind as ValueEnum>::from_str(name, false).ok()
    }

    pub fn long_name(self) -> &'static str {
        match self {
            TemplateKind::HelloWorld => "CPPHelloWorld",
            TemplateKind::Main => "CPPMain",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            TemplateKind::HelloWorld => "cpphw",
            TemplateKind::Main => "cppm",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            TemplateKind::HelloWorld => HELLO_WORLD_BODY,
            TemplateKind::Main => MAIN_BODY,
        }
    }
}
