//! 标识符生成的语法节点片段
//!
//! 形状沿用 pycparser 的 JSON 词汇（`_nodetype`、`coord`），
//! 由下游 parser 消费或覆盖。类型名、参数等由后续阶段补全。

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

/// 节点坐标，序列化为 `"<filename>:<line>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coord {
    pub filename: String,
    pub line: usize,
}

impl Coord {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.filename, self.line)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Id {
    pub name: String,
    pub coord: Coord,
}

/// 常量的字面类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantKind {
    String,
    Int,
}

impl ConstantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstantKind::String => "string",
            ConstantKind::Int => "int",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub kind: ConstantKind,
    /// 源码形式的值；None 表示尚未确定
    pub value: Option<String>,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprList {
    pub exprs: Vec<Constant>,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub name: Id,
    pub args: ExprList,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierType {
    /// 类型名，留空待后续阶段填入
    pub names: Vec<String>,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub declname: String,
    pub quals: Vec<String>,
    pub ty: IdentifierType,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub name: String,
    pub quals: Vec<String>,
    pub storage: Vec<String>,
    pub funcspec: Vec<String>,
    pub ty: TypeDecl,
    pub init: Constant,
    pub bitsize: Option<Constant>,
    pub coord: Coord,
}

/// 标识符节点片段
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    FuncCall(FuncCall),
    Decl(Decl),
}

impl FuncCall {
    /// 调用节点，参数列表是单个空字符串常量占位
    pub fn placeholder(name: impl Into<String>, coord: Coord) -> Self {
        Self {
            name: Id {
                name: name.into(),
                coord: coord.clone(),
            },
            args: ExprList {
                exprs: vec![Constant {
                    kind: ConstantKind::String,
                    value: Some("\"\"".to_string()),
                    coord: coord.clone(),
                }],
                coord: coord.clone(),
            },
            coord,
        }
    }
}

impl Decl {
    /// 声明节点，类型名与初值均未确定
    pub fn untyped(name: impl Into<String>, coord: Coord) -> Self {
        let name = name.into();
        Self {
            quals: Vec::new(),
            storage: Vec::new(),
            funcspec: Vec::new(),
            ty: TypeDecl {
                declname: name.clone(),
                quals: Vec::new(),
                ty: IdentifierType {
                    names: Vec::new(),
                    coord: coord.clone(),
                },
                coord: coord.clone(),
            },
            init: Constant {
                kind: ConstantKind::Int,
                value: None,
                coord: coord.clone(),
            },
            bitsize: None,
            name,
            coord,
        }
    }
}

/// 根据标识符之后是否紧跟 `(` 生成调用或声明节点
///
/// Plain 模式下 parser 在自己的 lookahead 之后调用它，得到与 Fragments 模式相同的片段。
pub fn shape_identifier(name: impl Into<String>, coord: Coord, followed_by_paren: bool) -> Node {
    if followed_by_paren {
        Node::FuncCall(FuncCall::placeholder(name, coord))
    } else {
        Node::Decl(Decl::untyped(name, coord))
    }
}

impl Node {
    /// 被调用者名或被声明名
    pub fn name(&self) -> &str {
        match self {
            Node::FuncCall(call) => &call.name.name,
            Node::Decl(decl) => &decl.name,
        }
    }

    pub fn coord(&self) -> &Coord {
        match self {
            Node::FuncCall(call) => &call.coord,
            Node::Decl(decl) => &decl.coord,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::FuncCall(call) => call.to_json(),
            Node::Decl(decl) => decl.to_json(),
        }
    }
}

impl Id {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "ID",
            "name": self.name,
            "coord": self.coord.to_string(),
        })
    }
}

impl Constant {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "Constant",
            "type": self.kind.as_str(),
            "value": self.value,
            "coord": self.coord.to_string(),
        })
    }
}

impl ExprList {
    pub fn to_json(&self) -> Value {
        let exprs: Vec<Value> = self.exprs.iter().map(Constant::to_json).collect();
        json!({
            "_nodetype": "ExprList",
            "coord": self.coord.to_string(),
            "exprs": exprs,
        })
    }
}

impl FuncCall {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "FuncCall",
            "coord": self.coord.to_string(),
            "name": self.name.to_json(),
            "args": self.args.to_json(),
        })
    }
}

impl IdentifierType {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "IdentifierType",
            "names": self.names,
            "coord": self.coord.to_string(),
        })
    }
}

impl TypeDecl {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "TypeDecl",
            "declname": self.declname,
            "quals": self.quals,
            "coord": self.coord.to_string(),
            "type": self.ty.to_json(),
        })
    }
}

impl Decl {
    pub fn to_json(&self) -> Value {
        json!({
            "_nodetype": "Decl",
            "name": self.name,
            "quals": self.quals,
            "storage": self.storage,
            "funcspec": self.funcspec,
            "coord": self.coord.to_string(),
            "type": self.ty.to_json(),
            "init": self.init.to_json(),
            "bitsize": self.bitsize.as_ref().map(Constant::to_json),
        })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord() -> Coord {
        Coord::new("main.HC", 3)
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(coord().to_string(), "main.HC:3");
    }

    #[test]
    fn test_func_call_json() {
        let node = shape_identifier("Print", coord(), true);
        assert_eq!(node.name(), "Print");

        let expected = json!({
            "_nodetype": "FuncCall",
            "coord": "main.HC:3",
            "name": {"_nodetype": "ID", "name": "Print", "coord": "main.HC:3"},
            "args": {
                "_nodetype": "ExprList",
                "coord": "main.HC:3",
                "exprs": [{
                    "_nodetype": "Constant",
                    "type": "string",
                    "value": "\"\"",
                    "coord": "main.HC:3"
                }]
            }
        });
        assert_eq!(node.to_json(), expected);
    }

    #[test]
    fn test_decl_json() {
        let node = shape_identifier("x", coord(), false);
        assert_eq!(node.name(), "x");

        let expected = json!({
            "_nodetype": "Decl",
            "name": "x",
            "quals": [],
            "storage": [],
            "funcspec": [],
            "coord": "main.HC:3",
            "type": {
                "_nodetype": "TypeDecl",
                "declname": "x",
                "quals": [],
                "coord": "main.HC:3",
                "type": {"_nodetype": "IdentifierType", "names": [], "coord": "main.HC:3"}
            },
            "init": {"_nodetype": "Constant", "type": "int", "value": null, "coord": "main.HC:3"},
            "bitsize": null
        });
        assert_eq!(node.to_json(), expected);
    }

    #[test]
    fn test_serialize_delegates_to_json() {
        let node = shape_identifier("y", coord(), false);
        assert_eq!(serde_json::to_value(&node).unwrap(), node.to_json());
    }
}
