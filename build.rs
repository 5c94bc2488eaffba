fn main() {
    // .pure() parses the .proto without protoc
    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["proto"])
        .input("proto/servers_file.proto")
        .cargo_out_dir("protos")
        .run_from_script();
}
